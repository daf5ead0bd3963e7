//! Body factor of a subject
//!
//! The body factor is the model coefficient clamped to the range observed for
//! the subject's sex. The raw registry output stays unclamped; clamping only
//! happens here, on the way into the simulation.

use crate::constants::{FEMALE_FACTOR_MAX, FEMALE_FACTOR_MIN, MALE_FACTOR_MAX, MALE_FACTOR_MIN};
use crate::domain::error::CoefficientError;
use crate::domain::model::Model;
use crate::domain::sex::Sex;

/// Subject of a simulation
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    /// Age in years (adjustment term of the Watson and Average formulas)
    pub age: f64,
    /// Height in meters
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    pub sex: Sex,
}

impl Person {
    pub fn new(age: f64, height: f64, weight: f64, sex: Sex) -> Self {
        Self {
            age,
            height,
            weight,
            sex,
        }
    }
}

/// Clamp a coefficient into the plausible range for `sex`
///
/// NaN is passed through unchanged.
pub fn clamp_coefficient(sex: Sex, r: f64) -> f64 {
    let (min, max) = match sex {
        Sex::Female => (FEMALE_FACTOR_MIN, FEMALE_FACTOR_MAX),
        Sex::Male => (MALE_FACTOR_MIN, MALE_FACTOR_MAX),
    };
    r.clamp(min, max)
}

/// Body factor of `person` under `model`
pub fn body_factor(model: Model, person: &Person) -> Result<f64, CoefficientError> {
    let r = model.call(person.sex, person.height, person.weight, person.age)?;
    Ok(clamp_coefficient(person.sex, r))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_ranges() {
        assert_eq!(clamp_coefficient(Sex::Female, 0.1), 0.44);
        assert_eq!(clamp_coefficient(Sex::Female, 0.95), 0.80);
        assert_eq!(clamp_coefficient(Sex::Female, 0.55), 0.55);
        assert_eq!(clamp_coefficient(Sex::Male, 0.1), 0.60);
        assert_eq!(clamp_coefficient(Sex::Male, 1.2), 0.87);
        assert_eq!(clamp_coefficient(Sex::Male, 0.68), 0.68);
    }

    #[test]
    fn test_clamp_nan_passthrough() {
        assert!(clamp_coefficient(Sex::Male, f64::NAN).is_nan());
        assert_eq!(clamp_coefficient(Sex::Male, f64::INFINITY), 0.87);
    }

    #[test]
    fn test_body_factor_clamps_model_output() {
        // Seidl female at 1.70 m / 120 kg drops below the female minimum
        let person = Person::new(30.0, 1.70, 120.0, Sex::Female);
        let raw = Model::Seidl
            .call(Sex::Female, person.height, person.weight, person.age)
            .unwrap();
        assert!(raw < 0.44);
        assert_eq!(body_factor(Model::Seidl, &person).unwrap(), 0.44);
    }

    #[test]
    fn test_body_factor_uses_age_as_adjustment() {
        let young = Person::new(20.0, 1.80, 80.0, Sex::Male);
        let old = Person::new(70.0, 1.80, 80.0, Sex::Male);
        let r_young = body_factor(Model::Watson, &young).unwrap();
        let r_old = body_factor(Model::Watson, &old).unwrap();
        assert!(r_old < r_young);
    }

    #[test]
    fn test_body_factor_ulrich_female() {
        let person = Person::new(30.0, 1.65, 60.0, Sex::Female);
        assert!(matches!(
            body_factor(Model::Ulrich, &person),
            Err(CoefficientError::FormulaUnavailable { .. })
        ));
    }
}
