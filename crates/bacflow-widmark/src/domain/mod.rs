//! Domain layer - Pure computational logic
//!
//! This module contains the coefficient formulas and intake types without any
//! workflow or I/O concerns.

pub mod body_factor;
pub mod elimination;
pub mod error;
pub mod intake;
pub mod model;
pub mod sex;
