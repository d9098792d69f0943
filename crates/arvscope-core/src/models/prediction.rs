use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Overall resistance classification produced by the external prediction
/// service. Serialized as the single-letter level code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ResistanceLevel {
    #[serde(rename = "H")]
    High,
    #[serde(rename = "I")]
    Intermediate,
    #[serde(rename = "L")]
    Low,
    #[serde(rename = "P")]
    Potential,
    #[serde(rename = "S")]
    Susceptible,
}

impl ResistanceLevel {
    pub const ALL: [ResistanceLevel; 5] = [
        ResistanceLevel::High,
        ResistanceLevel::Intermediate,
        ResistanceLevel::Low,
        ResistanceLevel::Potential,
        ResistanceLevel::Susceptible,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ResistanceLevel::High => "H",
            ResistanceLevel::Intermediate => "I",
            ResistanceLevel::Low => "L",
            ResistanceLevel::Potential => "P",
            ResistanceLevel::Susceptible => "S",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|level| level.code() == code)
            .ok_or_else(|| CoreError::UnknownResistanceLevel(code.to_string()))
    }

    pub fn description(&self) -> &'static str {
        match self {
            ResistanceLevel::High => "High Resistance",
            ResistanceLevel::Intermediate => "Intermediate Resistance",
            ResistanceLevel::Low => "Low Resistance",
            ResistanceLevel::Potential => "Potential Resistance",
            ResistanceLevel::Susceptible => "Susceptible",
        }
    }

    /// Normalized risk score in `[0, 1]` shown alongside the level.
    pub fn risk_score(&self) -> f64 {
        match self {
            ResistanceLevel::High => 0.9,
            ResistanceLevel::Intermediate => 0.6,
            ResistanceLevel::Low => 0.3,
            ResistanceLevel::Potential => 0.2,
            ResistanceLevel::Susceptible => 0.1,
        }
    }

    /// High and intermediate resistance call for an alternative regimen.
    pub fn requires_regimen_change(&self) -> bool {
        matches!(self, ResistanceLevel::High | ResistanceLevel::Intermediate)
    }
}

impl fmt::Display for ResistanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Response of the external resistance classification service.
///
/// Consumed, never produced, by the engine. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskPrediction {
    pub predicted_resistance_level: ResistanceLevel,
    #[serde(default)]
    pub risk_category: String,
    pub total_mutations: u32,
    /// Probability per level code; should sum to 1.0.
    pub all_probabilities: BTreeMap<ResistanceLevel, f64>,
    #[serde(default)]
    pub recommendation: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub probability_susceptible: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

/// Normalized risk derived from the predicted resistance level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskAssessment {
    pub level: ResistanceLevel,
    pub level_description: String,
    pub risk_score: f64,
    /// `risk_score` as a whole percentage.
    pub risk_percent: u8,
    pub band: RiskBand,
    pub risk_category: String,
}

/// One row of the probability breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProbabilityEntry {
    pub level: ResistanceLevel,
    pub description: String,
    pub probability: f64,
    /// `probability * 100`, rounded to one decimal place.
    pub percent: f64,
}
