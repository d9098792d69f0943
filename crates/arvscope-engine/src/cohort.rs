use arvscope_core::models::cohort::CohortSummary;

use crate::thresholds::HIGH_RISK_SCORE;

/// Split a patient list into high and low risk by score.
pub fn summarize_cohort(risk_scores: &[f64]) -> CohortSummary {
    let high = risk_scores.iter().filter(|s| **s >= HIGH_RISK_SCORE).count();
    let total = risk_scores.len();

    let high_risk_percent = if total == 0 {
        0.0
    } else {
        (high as f64 / total as f64 * 1000.0).round() / 10.0
    };

    CohortSummary {
        total_patients: total as u32,
        high_risk_count: high as u32,
        low_risk_count: (total - high) as u32,
        high_risk_percent,
    }
}
