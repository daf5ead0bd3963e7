//! Coefficient estimation errors

use crate::domain::model::Model;
use crate::domain::sex::Sex;
use thiserror::Error;

/// Errors raised by the coefficient strategy registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoefficientError {
    /// Sex tag is neither male nor female
    #[error("Invalid sex: '{0}' (expected M/male or F/female)")]
    InvalidSex(String),
    /// The selected model has no formula for the given sex
    #[error("No estimator available: {model} does not support {sex} subjects")]
    FormulaUnavailable { model: Model, sex: Sex },
    /// Model name is not one of the six known models
    #[error("Unknown model: '{0}' (expected one of Widmark, Watson, Forrest, Seidl, Ulrich, Average)")]
    UnknownModel(String),
}

/// Errors raised while interpreting intake records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    /// Food category name is not recognised
    #[error("Unknown food category: '{0}' (expected snack, light, moderate, full or heavy)")]
    UnknownFoodCategory(String),
}
