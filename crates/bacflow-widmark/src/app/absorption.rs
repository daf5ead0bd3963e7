//! Cumulative alcohol absorption
//!
//! Each drink is absorbed with first-order kinetics. The half-life at time `t`
//! follows the most recent meal eaten at or before `t`.

use crate::app::simulation::{SimulationConfig, SimulationError};
use crate::constants::MAX_GRID_POINTS;
use crate::domain::intake::{Drink, Food};
use std::f64::consts::LN_2;

/// Absorbed alcohol at one grid point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AbsorptionSample {
    /// Seconds from the session origin
    pub time: f64,
    /// Total ethanol absorbed so far (kg)
    pub kg_absorbed: f64,
}

/// Build the simulation time grid `[start, end)` with spacing `step`
///
/// Grids with more than [`MAX_GRID_POINTS`] points are rejected.
pub fn time_grid(start: f64, end: f64, step: f64) -> Result<Vec<f64>, SimulationError> {
    if step.is_nan() || step <= 0.0 || !start.is_finite() || !end.is_finite() || end < start {
        return Err(SimulationError::InvalidTimeGrid { start, end, step });
    }

    let points = ((end - start) / step).ceil();
    if !points.is_finite() || points > MAX_GRID_POINTS as f64 {
        return Err(SimulationError::InvalidTimeGrid { start, end, step });
    }

    let count = points as usize;
    Ok((0..count)
        .map(|i| start + step * i as f64)
        .filter(|&t| t < end)
        .collect())
}

/// Effective absorption half-life for each time point
///
/// Uses the half-life of the latest meal with `food.time <= t`, or
/// `default_halflife` before the first meal.
pub fn halflife_vector(times: &[f64], foods: &[Food], default_halflife: f64) -> Vec<f64> {
    if foods.is_empty() {
        return vec![default_halflife; times.len()];
    }

    let mut sorted: Vec<&Food> = foods.iter().collect();
    sorted.sort_by(|a, b| a.time.total_cmp(&b.time));

    times
        .iter()
        .map(|&t| {
            let idx = sorted.partition_point(|f| f.time <= t);
            if idx == 0 {
                default_halflife
            } else {
                sorted[idx - 1].category.halflife_secs()
            }
        })
        .collect()
}

/// Compute the cumulative absorption time series
///
/// Drinks with a sip interval are split into one-minute sips first.
pub fn cumulative_absorption(
    drinks: &[Drink],
    foods: &[Food],
    config: &SimulationConfig,
) -> Result<Vec<AbsorptionSample>, SimulationError> {
    let times = time_grid(config.start, config.end, config.step)?;
    let halflives = halflife_vector(&times, foods, config.default_halflife);
    let sips: Vec<Drink> = drinks.iter().flat_map(Drink::split_into_sips).collect();

    tracing::trace!(
        points = times.len(),
        sips = sips.len(),
        foods = foods.len(),
        "computing cumulative absorption"
    );

    let samples = times
        .iter()
        .zip(halflives.iter())
        .map(|(&t, &halflife)| {
            let absorbed: f64 = sips
                .iter()
                .map(|sip| {
                    let elapsed = (t - sip.time).max(0.0);
                    sip.alcohol_kg() * (1.0 - (-elapsed * LN_2 / halflife).exp())
                })
                .sum();
            AbsorptionSample {
                time: t,
                kg_absorbed: absorbed + config.initial_alcohol,
            }
        })
        .collect();

    Ok(samples)
}
