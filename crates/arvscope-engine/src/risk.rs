use arvscope_core::models::prediction::{
    ProbabilityEntry, ResistanceLevel, RiskAssessment, RiskBand, RiskPrediction,
};

use crate::error::EngineError;
use crate::thresholds::{HIGH_RISK_SCORE, MODERATE_RISK_SCORE, PROBABILITY_SUM_TOLERANCE};

const DEFAULT_RISK_CATEGORY: &str = "MODERATE";

/// Check the shape of a prediction. Says nothing about model correctness.
pub fn validate_prediction(prediction: &RiskPrediction) -> Result<(), EngineError> {
    if prediction.all_probabilities.is_empty() {
        return Err(EngineError::MalformedPrediction(
            "all_probabilities is empty".to_string(),
        ));
    }

    for (level, p) in &prediction.all_probabilities {
        if !(0.0..=1.0).contains(p) {
            return Err(EngineError::MalformedPrediction(format!(
                "probability for {level} is {p}, outside [0, 1]"
            )));
        }
    }

    let sum: f64 = prediction.all_probabilities.values().sum();
    if (sum - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
        return Err(EngineError::MalformedPrediction(format!(
            "probabilities sum to {sum}, expected 1.0"
        )));
    }

    Ok(())
}

/// Decode and validate a prediction service response body.
pub fn parse_prediction(body: &str) -> Result<RiskPrediction, EngineError> {
    let prediction: RiskPrediction = serde_json::from_str(body)?;
    validate_prediction(&prediction)?;
    Ok(prediction)
}

pub fn risk_band(score: f64) -> RiskBand {
    if score >= HIGH_RISK_SCORE {
        RiskBand::High
    } else if score >= MODERATE_RISK_SCORE {
        RiskBand::Moderate
    } else {
        RiskBand::Low
    }
}

pub fn assess_risk(prediction: &RiskPrediction) -> RiskAssessment {
    let level = prediction.predicted_resistance_level;
    let risk_score = level.risk_score();
    let risk_category = if prediction.risk_category.trim().is_empty() {
        DEFAULT_RISK_CATEGORY.to_string()
    } else {
        prediction.risk_category.clone()
    };

    RiskAssessment {
        level,
        level_description: level.description().to_string(),
        risk_score,
        risk_percent: (risk_score * 100.0).round() as u8,
        band: risk_band(risk_score),
        risk_category,
    }
}

/// Probabilities, highest first. Ties keep level order H, I, L, P, S.
pub fn probability_breakdown(prediction: &RiskPrediction) -> Vec<ProbabilityEntry> {
    let mut entries: Vec<ProbabilityEntry> = prediction
        .all_probabilities
        .iter()
        .map(|(level, p)| probability_entry(*level, *p))
        .collect();
    entries.sort_by(|a, b| {
        b.probability
            .total_cmp(&a.probability)
            .then(a.level.cmp(&b.level))
    });
    entries
}

fn probability_entry(level: ResistanceLevel, probability: f64) -> ProbabilityEntry {
    ProbabilityEntry {
        level,
        description: level.description().to_string(),
        probability,
        percent: (probability * 1000.0).round() / 10.0,
    }
}
