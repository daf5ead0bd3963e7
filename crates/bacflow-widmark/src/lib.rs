//! bacflow-widmark - Widmark-family body factor models
//!
//! This crate provides functionality to:
//! - Estimate the Widmark distribution coefficient with six interchangeable formulas
//! - Clamp coefficients to physiological ranges and derive a person's body factor
//! - Simulate blood alcohol concentration (BAC) over a drinking session

pub mod app;
pub mod constants;
pub mod domain;

// Re-export commonly used types
pub use app::absorption::{AbsorptionSample, cumulative_absorption};
pub use app::simulation::{
    AggregateSample, BacSample, BacSeries, SimulationConfig, SimulationError, ThresholdTimes,
    aggregate, bac_for_model, simulate, threshold_times,
};
pub use domain::body_factor::{Person, body_factor, clamp_coefficient};
pub use domain::error::{CoefficientError, IntakeError};
pub use domain::intake::{Drink, Food, FoodCategory};
pub use domain::model::{Model, estimate};
pub use domain::sex::Sex;
