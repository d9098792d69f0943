use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Sex {
    Male,
    Female,
}

/// Clinical labs and treatment history. Explanatory context only; never a
/// control input to classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalProfile {
    pub age: u32,
    pub sex: Sex,
    /// Copies/mL plasma.
    pub viral_load: f64,
    /// Cells/μL.
    pub cd4_count: f64,
    pub art_duration_months: f64,
    pub art_regimen: String,
}
