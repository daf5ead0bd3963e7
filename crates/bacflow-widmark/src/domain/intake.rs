//! Drinks and food intake
//!
//! Times are seconds relative to an arbitrary session origin.

use crate::constants::ETHANOL_DENSITY;
use crate::domain::error::IntakeError;
use std::fmt;
use std::str::FromStr;

/// A drink consumed during the session
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Drink {
    pub name: String,
    /// Volume in litres
    pub volume: f64,
    /// Alcohol by volume (0.05 = 5 %)
    pub alcohol_fraction: f64,
    /// Time the drink was started (seconds)
    pub time: f64,
    /// Minutes over which the drink is sipped (1 = all at once)
    #[cfg_attr(feature = "serde", serde(default = "default_sip_interval"))]
    pub sip_interval: u32,
}

#[cfg(feature = "serde")]
fn default_sip_interval() -> u32 {
    1
}

impl Drink {
    pub fn new(name: impl Into<String>, volume: f64, alcohol_fraction: f64, time: f64) -> Self {
        Self {
            name: name.into(),
            volume,
            alcohol_fraction,
            time,
            sip_interval: 1,
        }
    }

    /// Set the number of minutes the drink is spread over
    pub fn with_sip_interval(mut self, minutes: u32) -> Self {
        self.sip_interval = minutes;
        self
    }

    /// Mass of pure ethanol (kg)
    pub fn alcohol_kg(&self) -> f64 {
        self.volume * self.alcohol_fraction * ETHANOL_DENSITY
    }

    /// Split the drink into one-minute sips of equal volume
    ///
    /// A drink with `sip_interval <= 1` is returned unchanged.
    pub fn split_into_sips(&self) -> Vec<Drink> {
        if self.sip_interval <= 1 {
            return vec![self.clone()];
        }

        let sip_volume = self.volume / self.sip_interval as f64;
        (0..self.sip_interval)
            .map(|i| Drink {
                name: self.name.clone(),
                volume: sip_volume,
                alcohol_fraction: self.alcohol_fraction,
                time: self.time + 60.0 * i as f64,
                sip_interval: 1,
            })
            .collect()
    }
}

/// Size of a meal, which slows down absorption
///
/// Names parse case-insensitively, also when deserialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase", try_from = "String"))]
pub enum FoodCategory {
    Snack,
    Light,
    Moderate,
    Full,
    Heavy,
}

impl FoodCategory {
    /// Absorption half-life after eating this category (seconds)
    pub fn halflife_secs(self) -> f64 {
        let minutes = match self {
            FoodCategory::Snack => 6.0,
            FoodCategory::Light => 9.0,
            FoodCategory::Moderate => 12.0,
            FoodCategory::Full => 15.0,
            FoodCategory::Heavy => 18.0,
        };
        minutes * 60.0
    }

    pub fn name(self) -> &'static str {
        match self {
            FoodCategory::Snack => "snack",
            FoodCategory::Light => "light",
            FoodCategory::Moderate => "moderate",
            FoodCategory::Full => "full",
            FoodCategory::Heavy => "heavy",
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FoodCategory {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "snack" => Ok(FoodCategory::Snack),
            "light" => Ok(FoodCategory::Light),
            "moderate" => Ok(FoodCategory::Moderate),
            "full" => Ok(FoodCategory::Full),
            "heavy" => Ok(FoodCategory::Heavy),
            _ => Err(IntakeError::UnknownFoodCategory(s.to_string())),
        }
    }
}

impl TryFrom<String> for FoodCategory {
    type Error = IntakeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A meal eaten during the session
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Food {
    pub name: String,
    /// Time the food was eaten (seconds)
    pub time: f64,
    pub category: FoodCategory,
}

impl Food {
    pub fn new(name: impl Into<String>, time: f64, category: FoodCategory) -> Self {
        Self {
            name: name.into(),
            time,
            category,
        }
    }
}
