use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::clinical::ClinicalProfile;
use super::mutation::MutationProfile;
use super::prediction::{ProbabilityEntry, RiskAssessment, RiskPrediction};
use super::susceptibility::{DrugClassAssessment, DrugSusceptibility};
use super::treatment::{KeyDriver, TreatmentPlan};

/// Everything needed to evaluate one patient sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentRequest {
    pub mutations: MutationProfile,
    pub clinical: ClinicalProfile,
    pub prediction: RiskPrediction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResistanceReport {
    pub risk: RiskAssessment,
    pub drug_classes: Vec<DrugClassAssessment>,
    pub drugs: Vec<DrugSusceptibility>,
    pub key_drivers: Vec<KeyDriver>,
    pub probabilities: Vec<ProbabilityEntry>,
    pub plan: TreatmentPlan,
    /// Set when the service's `total_mutations` disagrees with the sum of
    /// the submitted per-class counts.
    pub mutation_total_mismatch: bool,
}
