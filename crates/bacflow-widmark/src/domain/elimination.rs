//! Alcohol elimination rate
//!
//! Rate model from M. Simic and M. Tasic (2007),
//! <https://pubmed.ncbi.nlm.nih.gov/17196778>.

use crate::constants::{AER_BAC_SLOPE, AER_MAX, AER_MIN, FEMALE_AER_BASE, MALE_AER_BASE};
use crate::domain::sex::Sex;

/// Alcohol elimination rate in % BAC per hour
///
/// `bac_percent` is the current concentration in percent (0.05 = 0.05 %).
#[inline]
pub fn elimination_rate(sex: Sex, bac_percent: f64) -> f64 {
    let base = match sex {
        Sex::Female => FEMALE_AER_BASE,
        Sex::Male => MALE_AER_BASE,
    };
    (base + bac_percent * AER_BAC_SLOPE).clamp(AER_MIN, AER_MAX)
}

/// BAC (as a fraction) eliminated over `step_secs` at the given rate
#[inline]
pub fn eliminated_per_step(rate_percent_per_hour: f64, step_secs: f64) -> f64 {
    rate_percent_per_hour / 100.0 * step_secs / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_within_bounds() {
        for sex in Sex::ALL {
            for bac in [-10.0, -1.0, 0.0, 0.05, 0.3, 5.0] {
                let rate = elimination_rate(sex, bac);
                assert!((AER_MIN..=AER_MAX).contains(&rate), "{} {}", sex, bac);
            }
        }
    }

    #[test]
    fn test_rate_clamped_to_max_for_positive_bac() {
        assert_eq!(elimination_rate(Sex::Male, 0.0), AER_MAX);
        assert_eq!(elimination_rate(Sex::Female, 0.08), AER_MAX);
    }

    #[test]
    fn test_rate_lower_bound() {
        assert_eq!(elimination_rate(Sex::Male, -100.0), AER_MIN);
    }

    #[test]
    fn test_eliminated_per_step() {
        // 0.036 %/h over one hour removes 0.00036 of BAC fraction
        let step = eliminated_per_step(0.036, 3600.0);
        assert!((step - 0.00036).abs() < 1e-15);
        assert_eq!(eliminated_per_step(0.02, 0.0), 0.0);
    }
}
