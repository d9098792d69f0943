use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// High/low split of a patient list by risk score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CohortSummary {
    pub total_patients: u32,
    pub high_risk_count: u32,
    pub low_risk_count: u32,
    /// Share of high-risk patients, one decimal place. 0 for an empty cohort.
    pub high_risk_percent: f64,
}
