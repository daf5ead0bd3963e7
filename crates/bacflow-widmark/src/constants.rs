//! Model and simulation constants
//!
//! Note: regression coefficients of the individual formulas live next to the
//! formulas in domain/model.rs.

// =============================================================================
// Body factor plausibility ranges
// =============================================================================

/// Lower bound of the female body factor after clamping
pub const FEMALE_FACTOR_MIN: f64 = 0.44;

/// Upper bound of the female body factor after clamping
pub const FEMALE_FACTOR_MAX: f64 = 0.80;

/// Lower bound of the male body factor after clamping
pub const MALE_FACTOR_MIN: f64 = 0.60;

/// Upper bound of the male body factor after clamping
pub const MALE_FACTOR_MAX: f64 = 0.87;

// =============================================================================
// Elimination (Simic & Tasic, 2007)
// =============================================================================

/// Base elimination rate for female subjects (% BAC per hour)
pub const FEMALE_AER_BASE: f64 = 0.16;

/// Base elimination rate for male subjects (% BAC per hour)
pub const MALE_AER_BASE: f64 = 0.14;

/// Elimination rate slope against the current BAC (in %)
pub const AER_BAC_SLOPE: f64 = 0.05;

/// Minimum elimination rate (% BAC per hour)
pub const AER_MIN: f64 = 0.009;

/// Maximum elimination rate (% BAC per hour)
pub const AER_MAX: f64 = 0.035;

// =============================================================================
// Intake and absorption
// =============================================================================

/// Density of ethanol (kg per litre)
pub const ETHANOL_DENSITY: f64 = 0.789;

/// Absorption half-life when no food has been eaten (12 minutes)
pub const DEFAULT_HALFLIFE_SECS: f64 = 12.0 * 60.0;

/// Default simulation step (1 minute)
pub const DEFAULT_STEP_SECS: f64 = 60.0;

/// Default simulated duration (12 hours)
pub const DEFAULT_DURATION_SECS: f64 = 12.0 * 3600.0;

/// Upper bound on time grid points (one week at one-second resolution)
pub const MAX_GRID_POINTS: usize = 7 * 24 * 3600;

/// Driving limit used when none is given (BAC fraction, 0.05 %)
pub const DEFAULT_DRIVING_LIMIT: f64 = 0.0005;

/// Mean BAC (fraction) at or below which a subject counts as sober (0.001 %)
pub const SOBER_TOLERANCE: f64 = 1e-5;

// =============================================================================
// Demonstration inputs
// =============================================================================

/// Sample height (m) used by the demo driver
pub const SAMPLE_HEIGHT: f64 = 1.70;

/// Sample weight (kg) used by the demo driver
pub const SAMPLE_WEIGHT: f64 = 70.0;

/// Sample adjustment term (age in years) used by the demo driver
pub const SAMPLE_ADJUSTMENT: f64 = 18.0;
