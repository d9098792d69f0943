//! arvscope-engine
//!
//! Rule-based resistance scoring and treatment recommendation. Every
//! function here is a pure computation over its arguments: no I/O, no
//! ambient state. Thresholds live in [`thresholds`] so all rules agree.

pub mod classify;
pub mod cohort;
pub mod drivers;
pub mod error;
pub mod normalize;
pub mod recommend;
pub mod risk;
pub mod susceptibility;
pub mod thresholds;
pub mod trend;

use arvscope_core::models::report::{AssessmentRequest, ResistanceReport};

use error::EngineError;

/// Run the full pipeline for one patient sample.
///
/// The service-reported `total_mutations` drives the total-burden rule; a
/// disagreement with the submitted per-class counts is flagged on the
/// report rather than reconciled. A clinical profile with a zero age or
/// negative labs is rejected before any rule runs.
pub fn evaluate(request: &AssessmentRequest) -> Result<ResistanceReport, EngineError> {
    let prediction = &request.prediction;
    risk::validate_prediction(prediction)?;
    normalize::validate_clinical(&request.clinical)?;

    let local_total = request.mutations.total_mutations();
    let mutation_total_mismatch = local_total != prediction.total_mutations;
    if mutation_total_mismatch {
        tracing::warn!(
            local_total,
            reported_total = prediction.total_mutations,
            "mutation total from prediction service differs from submitted counts"
        );
    }

    let drug_classes = classify::classify(&request.mutations);
    let drugs = susceptibility::resolve_susceptibility(&drug_classes);
    let key_drivers = drivers::explain_drivers(
        &request.mutations,
        &request.clinical,
        prediction.total_mutations,
    );
    let plan = recommend::recommend_regimens(
        prediction.predicted_resistance_level,
        &request.mutations,
        &request.clinical.art_regimen,
    );
    let risk = risk::assess_risk(prediction);

    tracing::info!(
        level = %risk.level,
        band = ?risk.band,
        drivers = key_drivers.len(),
        recommendations = plan.recommendations.len(),
        "assessment evaluated"
    );

    Ok(ResistanceReport {
        risk,
        drug_classes: drug_classes.to_vec(),
        drugs,
        key_drivers,
        probabilities: risk::probability_breakdown(prediction),
        plan,
        mutation_total_mismatch,
    })
}
