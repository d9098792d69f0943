use arvscope_core::models::mutation::DrugClass;
use arvscope_core::models::susceptibility::{
    DrugClassAssessment, DrugSusceptibility, SusceptibilityStatus,
};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A drug known to the resolver and the class code it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegisteredDrug {
    pub name: String,
    pub class_code: String,
}

impl RegisteredDrug {
    pub fn new(name: &str, class_code: &str) -> Self {
        Self {
            name: name.to_string(),
            class_code: class_code.to_string(),
        }
    }
}

/// The drugs reported on the detailed analysis view, in display order.
pub fn drug_registry() -> &'static [RegisteredDrug] {
    static REGISTRY: std::sync::LazyLock<Vec<RegisteredDrug>> = std::sync::LazyLock::new(|| {
        vec![
            RegisteredDrug::new("TDF", "NRTI"),
            RegisteredDrug::new("FTC", "NRTI"),
            RegisteredDrug::new("3TC", "NRTI"),
            RegisteredDrug::new("LPV/r", "PI"),
            RegisteredDrug::new("DRV/r", "PI"),
            RegisteredDrug::new("EFV", "NNRTI"),
            RegisteredDrug::new("NVP", "NNRTI"),
        ]
    });
    &REGISTRY
}

pub fn resolve_susceptibility(assessments: &[DrugClassAssessment]) -> Vec<DrugSusceptibility> {
    resolve_with_registry(drug_registry(), assessments)
}

/// Resolve each registered drug against its class assessment.
///
/// Drugs whose class is unknown, or whose class was not assessed, resolve
/// to `Unknown` instead of failing.
pub fn resolve_with_registry(
    registry: &[RegisteredDrug],
    assessments: &[DrugClassAssessment],
) -> Vec<DrugSusceptibility> {
    registry
        .iter()
        .map(|drug| DrugSusceptibility {
            drug_name: drug.name.clone(),
            drug_class: drug.class_code.clone(),
            status: drug_status(drug, assessments),
        })
        .collect()
}

fn drug_status(drug: &RegisteredDrug, assessments: &[DrugClassAssessment]) -> SusceptibilityStatus {
    let class = match DrugClass::from_code(&drug.class_code) {
        Ok(class) => class,
        Err(e) => {
            tracing::warn!(drug = %drug.name, error = %e, "drug registered under unknown class");
            return SusceptibilityStatus::Unknown;
        }
    };

    match assessments.iter().find(|a| a.drug_class == class) {
        Some(assessment) => SusceptibilityStatus::from_severity(assessment.severity),
        None => {
            tracing::warn!(drug = %drug.name, class = %class, "no assessment for drug class");
            SusceptibilityStatus::Unknown
        }
    }
}
