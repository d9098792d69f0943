//! Regimen recommendations and the companion avoid-list.
//!
//! The two are computed independently from the same mutation counts and
//! never feed into each other.

use arvscope_core::models::mutation::MutationProfile;
use arvscope_core::models::prediction::ResistanceLevel;
use arvscope_core::models::treatment::{AvoidItem, RegimenRecommendation, TreatmentPlan};

use crate::thresholds::{
    AVOID_NNRTI_MUTATIONS, AVOID_NRTI_HIGH_MUTATIONS, AVOID_NRTI_MODERATE_MUTATIONS,
    AVOID_PI_MUTATIONS, MAX_RECOMMENDATIONS, RECOMMEND_CLASS_MUTATIONS_BELOW,
};

pub const CONTINUE_CURRENT_REGIMEN: &str = "Continue Current Regimen";
pub const NO_RESTRICTIONS: &str = "None";

struct Candidate {
    regimen: &'static str,
    success: u8,
    reason: &'static str,
    details: &'static str,
}

const DRV_ABC_3TC: Candidate = Candidate {
    regimen: "DRV/r + ABC + 3TC",
    success: 90,
    reason: "Low PI resistance; DRV/r has high barrier to resistance",
    details: "Darunavir/ritonavir with Abacavir and Lamivudine provides robust viral suppression",
};

const DTG_TAF_FTC: Candidate = Candidate {
    regimen: "DTG + TAF + FTC",
    success: 88,
    reason: "INSTI-based regimen with low NRTI resistance",
    details: "Dolutegravir (INSTI) combined with Tenofovir alafenamide and Emtricitabine",
};

const EFV_TDF_3TC: Candidate = Candidate {
    regimen: "EFV + TDF + 3TC",
    success: 82,
    reason: "Low NNRTI resistance detected",
    details: "Efavirenz-based combination with standard NRTIs",
};

const ATV_RAL_FTC: Candidate = Candidate {
    regimen: "ATV/r + RAL + FTC",
    success: 85,
    reason: "Combination therapy with boosted PI and INSTI",
    details: "Atazanavir/ritonavir with Raltegravir and Emtricitabine",
};

const BIC_TAF_FTC: Candidate = Candidate {
    regimen: "BIC/TAF/FTC",
    success: 92,
    reason: "Single-tablet INSTI-based regimen for improved adherence",
    details: "Bictegravir/Tenofovir alafenamide/Emtricitabine - modern STR",
};

/// Label for the n-th (1-based) candidate of the resistance branch.
fn positional_label(rank: u32) -> &'static str {
    match rank {
        1 => "FIRST CHOICE",
        2 => "ALTERNATIVE OPTION",
        _ => "THIRD OPTION",
    }
}

fn to_recommendation(rank: u32, label: &str, candidate: &Candidate) -> RegimenRecommendation {
    RegimenRecommendation {
        priority_rank: rank,
        priority_label: label.to_string(),
        regimen_name: candidate.regimen.to_string(),
        predicted_success_percent: candidate.success,
        reason: candidate.reason.to_string(),
        details: candidate.details.to_string(),
    }
}

/// Ranked regimen candidates, at most [`MAX_RECOMMENDATIONS`].
pub fn recommend(
    level: ResistanceLevel,
    mutations: &MutationProfile,
    current_regimen: &str,
) -> Vec<RegimenRecommendation> {
    if level.requires_regimen_change() {
        alternative_regimens(mutations)
    } else {
        maintenance_regimens(current_regimen)
    }
}

fn alternative_regimens(mutations: &MutationProfile) -> Vec<RegimenRecommendation> {
    let low = |count: u32| count < RECOMMEND_CLASS_MUTATIONS_BELOW;
    let rules = [
        (low(mutations.pi_count), &DRV_ABC_3TC),
        (low(mutations.nrti_count), &DTG_TAF_FTC),
        (low(mutations.nnrti_count), &EFV_TDF_3TC),
        (true, &ATV_RAL_FTC),
    ];

    rules
        .into_iter()
        .filter_map(|(fired, candidate)| fired.then_some(candidate))
        .take(MAX_RECOMMENDATIONS)
        .zip(1u32..)
        .map(|(candidate, rank)| to_recommendation(rank, positional_label(rank), candidate))
        .collect()
}

fn maintenance_regimens(current_regimen: &str) -> Vec<RegimenRecommendation> {
    let current = if current_regimen.trim().is_empty() {
        "current regimen"
    } else {
        current_regimen
    };

    vec![
        RegimenRecommendation {
            priority_rank: 1,
            priority_label: "RECOMMENDED".to_string(),
            regimen_name: CONTINUE_CURRENT_REGIMEN.to_string(),
            predicted_success_percent: 95,
            reason: "Low resistance profile - current therapy effective".to_string(),
            details: format!("Continue {current} with regular monitoring"),
        },
        to_recommendation(2, "OPTIMIZATION OPTION", &BIC_TAF_FTC),
    ]
}

/// Drugs to avoid or use with caution. Never empty: with no restriction a
/// single `None` sentinel entry is returned.
pub fn drugs_to_avoid(mutations: &MutationProfile) -> Vec<AvoidItem> {
    let mut avoid = Vec::new();

    if mutations.nrti_count >= AVOID_NRTI_HIGH_MUTATIONS {
        avoid.push(AvoidItem::new("TDF/TAF", "High NRTI resistance detected"));
        avoid.push(AvoidItem::new("ABC", "Cross-resistance with other NRTIs"));
    } else if mutations.nrti_count >= AVOID_NRTI_MODERATE_MUTATIONS {
        avoid.push(AvoidItem::new("TDF", "Moderate NRTI resistance"));
    }

    if mutations.nnrti_count >= AVOID_NNRTI_MUTATIONS {
        avoid.push(AvoidItem::new("EFV", "High NNRTI resistance"));
        avoid.push(AvoidItem::new("NVP", "NNRTI class resistance"));
    }

    if mutations.pi_count >= AVOID_PI_MUTATIONS {
        avoid.push(AvoidItem::new("LPV/r", "PI resistance detected"));
    }

    if avoid.is_empty() {
        avoid.push(AvoidItem::new(
            NO_RESTRICTIONS,
            "No specific drugs to avoid based on current resistance profile",
        ));
    }

    avoid
}

pub fn recommend_regimens(
    level: ResistanceLevel,
    mutations: &MutationProfile,
    current_regimen: &str,
) -> TreatmentPlan {
    TreatmentPlan {
        recommendations: recommend(level, mutations, current_regimen),
        avoid: drugs_to_avoid(mutations),
    }
}
