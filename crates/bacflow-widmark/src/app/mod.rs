//! Application layer - Use case implementations
//!
//! This module combines the domain formulas into absorption and BAC simulation workflows.

pub mod absorption;
pub mod simulation;
