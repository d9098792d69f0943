use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A human-readable explanation of an input that drove the classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct KeyDriver {
    pub text: String,
}

impl KeyDriver {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A candidate regimen. `priority_rank` reflects emission order, not
/// clinical superiority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegimenRecommendation {
    pub priority_rank: u32,
    pub priority_label: String,
    pub regimen_name: String,
    /// In `[0, 100]`.
    pub predicted_success_percent: u8,
    pub reason: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AvoidItem {
    pub drug_name: String,
    pub reason: String,
}

impl AvoidItem {
    pub fn new(drug_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            drug_name: drug_name.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TreatmentPlan {
    pub recommendations: Vec<RegimenRecommendation>,
    pub avoid: Vec<AvoidItem>,
}
