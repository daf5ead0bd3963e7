//! Widmark coefficient strategy registry
//!
//! Six closed-form regressions estimate the distribution coefficient `r` from
//! height (m), weight (kg) and an adjustment term (age in years, used only by
//! the Watson and Average male branches). Each model maps to a pair of pure
//! functions, one per sex. Results are returned raw: no clamping and no guard
//! against division by zero, so degenerate inputs yield `inf` or `NaN`.

use crate::domain::error::CoefficientError;
use crate::domain::sex::Sex;
use std::fmt;
use std::str::FromStr;

/// Formula signature: (height, weight, adjustment) -> coefficient
pub type Formula = fn(f64, f64, f64) -> f64;

/// Coefficient model
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Model {
    Widmark,
    Watson,
    Forrest,
    Seidl,
    Ulrich,
    Average,
}

impl Model {
    /// All models in declaration order
    pub const ALL: [Model; 6] = [
        Model::Widmark,
        Model::Watson,
        Model::Forrest,
        Model::Seidl,
        Model::Ulrich,
        Model::Average,
    ];

    /// Model name as exposed across the host boundary
    pub fn name(self) -> &'static str {
        match self {
            Model::Widmark => "Widmark",
            Model::Watson => "Watson",
            Model::Forrest => "Forrest",
            Model::Seidl => "Seidl",
            Model::Ulrich => "Ulrich",
            Model::Average => "Average",
        }
    }

    /// Female and male formulas of this model
    ///
    /// `None` marks a branch the model does not define.
    pub fn formulas(self) -> (Option<Formula>, Formula) {
        match self {
            Model::Widmark => (Some(widmark_female), widmark_male),
            Model::Watson => (Some(watson_female), watson_male),
            Model::Forrest => (Some(forrest_female), forrest_male),
            Model::Seidl => (Some(seidl_female), seidl_male),
            Model::Ulrich => (None, ulrich_male),
            Model::Average => (Some(average_female), average_male),
        }
    }

    /// Check whether the model defines a formula for `sex`
    pub fn supports(self, sex: Sex) -> bool {
        match sex {
            Sex::Male => true,
            Sex::Female => self.formulas().0.is_some(),
        }
    }

    /// Models usable for subjects of `sex`, in declaration order
    pub fn supported_for(sex: Sex) -> Vec<Model> {
        Self::ALL.into_iter().filter(|m| m.supports(sex)).collect()
    }

    /// Evaluate the female branch
    pub fn forward_female(
        self,
        height: f64,
        weight: f64,
        adjustment: f64,
    ) -> Result<f64, CoefficientError> {
        match self.formulas().0 {
            Some(formula) => Ok(formula(height, weight, adjustment)),
            None => Err(CoefficientError::FormulaUnavailable {
                model: self,
                sex: Sex::Female,
            }),
        }
    }

    /// Evaluate the male branch
    pub fn forward_male(self, height: f64, weight: f64, adjustment: f64) -> f64 {
        (self.formulas().1)(height, weight, adjustment)
    }

    /// Evaluate the branch selected by `sex`
    pub fn call(
        self,
        sex: Sex,
        height: f64,
        weight: f64,
        adjustment: f64,
    ) -> Result<f64, CoefficientError> {
        match sex {
            Sex::Female => self.forward_female(height, weight, adjustment),
            Sex::Male => Ok(self.forward_male(height, weight, adjustment)),
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Model {
    type Err = CoefficientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| CoefficientError::UnknownModel(s.to_string()))
    }
}

/// Estimate a coefficient by model name and sex tag
///
/// This is the by-name entry point for host bindings: both the model and the
/// sex arrive as text and are resolved before dispatch.
pub fn estimate(
    model_name: &str,
    sex: &str,
    height: f64,
    weight: f64,
    adjustment: f64,
) -> Result<f64, CoefficientError> {
    let model: Model = model_name.parse()?;
    let sex: Sex = sex.parse()?;
    model.call(sex, height, weight, adjustment)
}

// =============================================================================
// Formulas
// =============================================================================

fn widmark_female(_h: f64, _w: f64, _g: f64) -> f64 {
    0.55
}

fn widmark_male(_h: f64, _w: f64, _g: f64) -> f64 {
    0.68
}

fn watson_female(h: f64, w: f64, _g: f64) -> f64 {
    0.29218 + (12.666 * h - 2.4846) / w
}

fn watson_male(h: f64, w: f64, g: f64) -> f64 {
    0.39834 + (12.725 * h - 0.11275 * g + 2.8993) / w
}

fn forrest_female(h: f64, w: f64, _g: f64) -> f64 {
    0.8736 - 0.0124 * w / (h * h)
}

fn forrest_male(h: f64, w: f64, _g: f64) -> f64 {
    1.0178 - 0.012127 * w / (h * h)
}

fn seidl_female(h: f64, w: f64, _g: f64) -> f64 {
    0.31223 - 0.006446 * w + 0.4466 * h
}

fn seidl_male(h: f64, w: f64, _g: f64) -> f64 {
    0.31608 - 0.004821 * w + 0.4632 * h
}

fn ulrich_male(h: f64, w: f64, _g: f64) -> f64 {
    0.715 - 0.00462 * w + 0.22 * h
}

fn average_female(h: f64, w: f64, _g: f64) -> f64 {
    0.50766 + 0.11165 * h - w * (0.001612 + 0.0031 / (h * h)) - (1.0 / w) * (0.62115 - 3.1665 * h)
}

fn average_male(h: f64, w: f64, g: f64) -> f64 {
    0.62544 + 0.13664 * h - w * (0.00189 + 0.002425 / (h * h))
        + (1.0 / w) * (0.57986 + 2.545 * h - 0.02255 * g)
}
