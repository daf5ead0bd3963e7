//! Biological sex tag used to select a formula branch

use crate::domain::error::CoefficientError;
use std::fmt;
use std::str::FromStr;

/// Sex of the subject
///
/// Every formula has one branch per value. Host boundaries that carry the tag
/// as text or as a raw code go through [`FromStr`] or [`Sex::from_code`], which
/// reject anything else with [`CoefficientError::InvalidSex`]. Deserialization
/// goes through [`FromStr`] as well.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Both values, male first
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    /// Convert a raw host code (0 = male, 1 = female)
    pub fn from_code(code: i64) -> Result<Self, CoefficientError> {
        match code {
            0 => Ok(Sex::Male),
            1 => Ok(Sex::Female),
            other => Err(CoefficientError::InvalidSex(other.to_string())),
        }
    }

    /// Raw host code of this value
    pub fn code(self) -> i64 {
        match self {
            Sex::Male => 0,
            Sex::Female => 1,
        }
    }

    /// Single-letter tag (`M` / `F`)
    pub fn tag(self) -> char {
        match self {
            Sex::Male => 'M',
            Sex::Female => 'F',
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => f.write_str("male"),
            Sex::Female => f.write_str("female"),
        }
    }
}

impl FromStr for Sex {
    type Err = CoefficientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "male" => Ok(Sex::Male),
            "f" | "female" => Ok(Sex::Female),
            _ => Err(CoefficientError::InvalidSex(s.to_string())),
        }
    }
}

impl TryFrom<String> for Sex {
    type Error = CoefficientError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
