//! Business constants shared by every rule in the engine.
//!
//! These are fixed clinical cutoffs, not learned parameters. Comparisons
//! against them are inclusive (`>=`) unless the constant name says otherwise.

/// Resistance percentage contributed by each mutation in a class.
pub const PERCENT_PER_MUTATION: f64 = 10.0;
pub const MAX_RESISTANCE_PERCENT: f64 = 100.0;

/// Class mutation count at which severity becomes `Medium`.
pub const MEDIUM_SEVERITY_MUTATIONS: u32 = 4;
/// Class mutation count at which severity becomes `High`.
pub const HIGH_SEVERITY_MUTATIONS: u32 = 7;

/// Per-class count that makes the class a key driver.
pub const DRIVER_CLASS_MUTATIONS: u32 = 4;
/// Viral load strictly above this is a key driver (copies/mL).
pub const DRIVER_VIRAL_LOAD_ABOVE: f64 = 50_000.0;
/// CD4+ count strictly below this is a key driver (cells/μL).
pub const DRIVER_CD4_BELOW: f64 = 200.0;
/// Total mutation count that makes the overall burden a key driver.
pub const DRIVER_TOTAL_MUTATIONS: u32 = 8;

/// A class with strictly fewer mutations keeps its regimen on the table.
pub const RECOMMEND_CLASS_MUTATIONS_BELOW: u32 = 3;
pub const MAX_RECOMMENDATIONS: usize = 3;

pub const AVOID_NRTI_HIGH_MUTATIONS: u32 = 5;
pub const AVOID_NRTI_MODERATE_MUTATIONS: u32 = 3;
pub const AVOID_NNRTI_MUTATIONS: u32 = 4;
pub const AVOID_PI_MUTATIONS: u32 = 5;

pub const HIGH_RISK_SCORE: f64 = 0.7;
pub const MODERATE_RISK_SCORE: f64 = 0.4;

/// Allowed distance of the summed class probabilities from 1.0.
pub const PROBABILITY_SUM_TOLERANCE: f64 = 0.01;
