use arvscope_core::models::mutation::{DrugClass, MutationProfile};
use arvscope_core::models::susceptibility::{DrugClassAssessment, Severity};

use crate::thresholds::{
    HIGH_SEVERITY_MUTATIONS, MAX_RESISTANCE_PERCENT, MEDIUM_SEVERITY_MUTATIONS,
    PERCENT_PER_MUTATION,
};

/// `min(count * 10, 100)`.
pub fn resistance_percent(count: u32) -> f64 {
    (f64::from(count) * PERCENT_PER_MUTATION).min(MAX_RESISTANCE_PERCENT)
}

pub fn severity(count: u32) -> Severity {
    if count >= HIGH_SEVERITY_MUTATIONS {
        Severity::High
    } else if count >= MEDIUM_SEVERITY_MUTATIONS {
        Severity::Medium
    } else {
        Severity::Low
    }
}

pub fn assess_class(class: DrugClass, count: u32) -> DrugClassAssessment {
    DrugClassAssessment {
        drug_class: class,
        mutation_count: count,
        resistance_percent: resistance_percent(count),
        severity: severity(count),
    }
}

/// One assessment per class, in PI, NRTI, NNRTI order.
pub fn classify(profile: &MutationProfile) -> [DrugClassAssessment; 3] {
    DrugClass::ALL.map(|class| assess_class(class, profile.count(class)))
}
