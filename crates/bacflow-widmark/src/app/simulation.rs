//! BAC simulation workflow
//!
//! This module turns an absorption time series into one BAC series per model,
//! aggregates the models and locates the drive-safe and sober times.

use crate::app::absorption::{AbsorptionSample, cumulative_absorption};
use crate::constants::{DEFAULT_DURATION_SECS, DEFAULT_HALFLIFE_SECS, DEFAULT_STEP_SECS};
use crate::domain::body_factor::{Person, body_factor};
use crate::domain::elimination::{eliminated_per_step, elimination_rate};
use crate::domain::error::CoefficientError;
use crate::domain::intake::{Drink, Food};
use crate::domain::model::Model;
use thiserror::Error;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Simulation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Coefficient(#[from] CoefficientError),
    /// Time grid parameters do not describe a forward grid
    #[error("Invalid time grid: start {start}, end {end}, step {step}")]
    InvalidTimeGrid { start: f64, end: f64, step: f64 },
    /// Series passed to aggregation do not share a time grid
    #[error("Mismatched series: expected {expected} samples, found {found}")]
    MismatchedSeries { expected: usize, found: usize },
}

/// Simulation parameters
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Start of the simulated window (seconds)
    pub start: f64,
    /// End of the simulated window, exclusive (seconds)
    pub end: f64,
    /// Grid spacing (seconds)
    pub step: f64,
    /// Absorption half-life before any meal (seconds)
    pub default_halflife: f64,
    /// Alcohol already absorbed at `start` (kg)
    pub initial_alcohol: f64,
}

impl SimulationConfig {
    /// Create a config for `[start, end)` with default step and half-life
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            step: DEFAULT_STEP_SECS,
            default_halflife: DEFAULT_HALFLIFE_SECS,
            initial_alcohol: 0.0,
        }
    }

    /// Create a config starting at the first drink and lasting the default duration
    pub fn for_session(drinks: &[Drink]) -> Self {
        let start = drinks
            .iter()
            .map(|d| d.time)
            .min_by(f64::total_cmp)
            .unwrap_or(0.0);
        Self::new(start, start + DEFAULT_DURATION_SECS)
    }

    /// Set the grid spacing
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(0.0, DEFAULT_DURATION_SECS)
    }
}

/// BAC state at one grid point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BacSample {
    pub time: f64,
    /// Concentration if nothing had been eliminated (fraction)
    pub bac_excluding_elimination: f64,
    /// Cumulative eliminated concentration (fraction)
    pub eliminated: f64,
    /// Concentration (fraction, 0.0005 = 0.05 %)
    pub bac: f64,
    /// Concentration in percent
    pub bac_percent: f64,
}

/// BAC time series produced by one model
#[derive(Clone, Debug, PartialEq)]
pub struct BacSeries {
    pub model: Model,
    /// Clamped body factor used for the series
    pub body_factor: f64,
    pub samples: Vec<BacSample>,
}

impl BacSeries {
    /// Sample with the highest BAC
    pub fn peak(&self) -> Option<&BacSample> {
        self.samples.iter().max_by(|a, b| a.bac.total_cmp(&b.bac))
    }

    /// First time at or after `from` where BAC has dropped to zero
    pub fn zero_after(&self, from: f64) -> Option<f64> {
        self.samples
            .iter()
            .find(|s| s.time >= from && s.bac == 0.0)
            .map(|s| s.time)
    }
}

/// Mean and variance across models at one grid point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AggregateSample {
    pub time: f64,
    pub mean_bac: f64,
    /// Population variance (ddof = 0)
    pub var_bac: f64,
}

/// Times at which the aggregate BAC settles below a threshold
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ThresholdTimes {
    /// Start of the final run below the driving limit
    pub drive_safe: Option<f64>,
    /// Start of the final run at or below the sober tolerance
    pub sober: Option<f64>,
}

/// Compute the BAC series for one model
///
/// `step` is the grid spacing of `absorption` in seconds. The elimination at
/// each step uses the rate derived from the previous step's BAC, and never
/// removes more than is currently present.
pub fn bac_for_model(
    person: &Person,
    absorption: &[AbsorptionSample],
    model: Model,
    step: f64,
) -> Result<BacSeries, SimulationError> {
    let r = body_factor(model, person)?;
    let distribution = r * person.weight;

    let mut samples: Vec<BacSample> = Vec::with_capacity(absorption.len());
    for sample in absorption {
        let bac_excluding_elimination = sample.kg_absorbed / distribution;

        let eliminated = match samples.last() {
            None => 0.0,
            Some(prev) => {
                let available = bac_excluding_elimination - prev.eliminated;
                let rate = elimination_rate(person.sex, prev.bac_percent);
                prev.eliminated + available.min(eliminated_per_step(rate, step))
            }
        };

        let bac = (bac_excluding_elimination - eliminated).max(0.0);
        samples.push(BacSample {
            time: sample.time,
            bac_excluding_elimination,
            eliminated,
            bac,
            bac_percent: bac * 100.0,
        });
    }

    Ok(BacSeries {
        model,
        body_factor: r,
        samples,
    })
}

/// Run the simulation for every model in `models`
///
/// Absorption is computed once and shared; the models are evaluated in
/// parallel when the `parallel` feature is enabled. The output keeps the order
/// of `models`. Without drinks there is nothing to simulate and the result is
/// empty.
pub fn simulate(
    drinks: &[Drink],
    person: &Person,
    config: &SimulationConfig,
    models: &[Model],
    foods: &[Food],
) -> Result<Vec<BacSeries>, SimulationError> {
    if drinks.is_empty() {
        return Ok(Vec::new());
    }

    if let Some(&model) = models.iter().find(|m| !m.supports(person.sex)) {
        return Err(CoefficientError::FormulaUnavailable {
            model,
            sex: person.sex,
        }
        .into());
    }

    let absorption = cumulative_absorption(drinks, foods, config)?;

    tracing::debug!(
        models = models.len(),
        points = absorption.len(),
        sex = %person.sex,
        "simulating BAC"
    );

    #[cfg(feature = "parallel")]
    let results = models
        .par_iter()
        .map(|&model| bac_for_model(person, &absorption, model, config.step))
        .collect::<Result<Vec<_>, _>>()?;

    #[cfg(not(feature = "parallel"))]
    let results = models
        .iter()
        .map(|&model| bac_for_model(person, &absorption, model, config.step))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(results)
}

/// Aggregate several model series into mean and variance per grid point
///
/// All series must share the same time grid.
pub fn aggregate(results: &[BacSeries]) -> Result<Vec<AggregateSample>, SimulationError> {
    let Some(first) = results.first() else {
        return Ok(Vec::new());
    };

    let len = first.samples.len();
    for series in &results[1..] {
        if series.samples.len() != len {
            return Err(SimulationError::MismatchedSeries {
                expected: len,
                found: series.samples.len(),
            });
        }
    }

    let n = results.len() as f64;
    let aggregated = (0..len)
        .map(|i| {
            let mean = results.iter().map(|s| s.samples[i].bac).sum::<f64>() / n;
            let var = results
                .iter()
                .map(|s| {
                    let d = s.samples[i].bac - mean;
                    d * d
                })
                .sum::<f64>()
                / n;
            AggregateSample {
                time: first.samples[i].time,
                mean_bac: mean,
                var_bac: var,
            }
        })
        .collect();

    Ok(aggregated)
}

/// Locate the drive-safe and sober times of an aggregate series
///
/// Each time is the start of the trailing run of samples satisfying the
/// condition. If the series does not end inside such a run, the time is `None`.
pub fn threshold_times(
    aggregate: &[AggregateSample],
    driving_limit: f64,
    tolerance: f64,
) -> ThresholdTimes {
    ThresholdTimes {
        drive_safe: trailing_run_start(aggregate, |bac| bac < driving_limit),
        sober: trailing_run_start(aggregate, |bac| bac <= tolerance),
    }
}

fn trailing_run_start<F>(aggregate: &[AggregateSample], condition: F) -> Option<f64>
where
    F: Fn(f64) -> bool,
{
    let run = aggregate
        .iter()
        .rev()
        .take_while(|s| condition(s.mean_bac))
        .count();

    if run == 0 {
        None
    } else {
        Some(aggregate[aggregate.len() - run].time)
    }
}
