use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::mutation::DrugClass;

/// Three-tier resistance severity for a drug class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DrugClassAssessment {
    pub drug_class: DrugClass,
    pub mutation_count: u32,
    /// In `[0, 100]`.
    pub resistance_percent: f64,
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SusceptibilityStatus {
    Susceptible,
    Intermediate,
    #[serde(rename = "High Resistance")]
    HighResistance,
    Unknown,
}

impl SusceptibilityStatus {
    pub fn from_severity(severity: Severity) -> Self {
        match severity {
            Severity::High => SusceptibilityStatus::HighResistance,
            Severity::Medium => SusceptibilityStatus::Intermediate,
            Severity::Low => SusceptibilityStatus::Susceptible,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SusceptibilityStatus::Susceptible => "Susceptible",
            SusceptibilityStatus::Intermediate => "Intermediate",
            SusceptibilityStatus::HighResistance => "High Resistance",
            SusceptibilityStatus::Unknown => "Unknown",
        }
    }
}

/// Susceptibility of one named drug, derived from its class's severity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DrugSusceptibility {
    pub drug_name: String,
    /// Registry class code. Kept as a string so drugs registered under a
    /// class the engine does not assess still show up (as `Unknown`).
    pub drug_class: String,
    pub status: SusceptibilityStatus,
}
