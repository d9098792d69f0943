use std::collections::BTreeMap;

use arvscope_core::models::prediction::{ResistanceLevel, RiskBand, RiskPrediction};
use arvscope_engine::cohort::summarize_cohort;
use arvscope_engine::error::EngineError;
use arvscope_engine::risk::{
    assess_risk, parse_prediction, probability_breakdown, risk_band, validate_prediction,
};

fn prediction(level: ResistanceLevel, probabilities: &[(ResistanceLevel, f64)]) -> RiskPrediction {
    RiskPrediction {
        predicted_resistance_level: level,
        risk_category: String::new(),
        total_mutations: 0,
        all_probabilities: probabilities.iter().copied().collect::<BTreeMap<_, _>>(),
        recommendation: String::new(),
        explanation: String::new(),
        probability_susceptible: None,
    }
}

#[test]
fn risk_score_follows_level() {
    let high = assess_risk(&prediction(ResistanceLevel::High, &[(ResistanceLevel::High, 1.0)]));
    assert_eq!(high.risk_score, 0.9);
    assert_eq!(high.risk_percent, 90);
    assert_eq!(high.band, RiskBand::High);
    assert_eq!(high.level_description, "High Resistance");

    let intermediate = assess_risk(&prediction(ResistanceLevel::Intermediate, &[]));
    assert_eq!(intermediate.band, RiskBand::Moderate);

    let susceptible = assess_risk(&prediction(ResistanceLevel::Susceptible, &[]));
    assert_eq!(susceptible.risk_percent, 10);
    assert_eq!(susceptible.band, RiskBand::Low);
}

#[test]
fn band_boundaries_are_inclusive() {
    assert_eq!(risk_band(0.7), RiskBand::High);
    assert_eq!(risk_band(0.69), RiskBand::Moderate);
    assert_eq!(risk_band(0.4), RiskBand::Moderate);
    assert_eq!(risk_band(0.39), RiskBand::Low);
}

#[test]
fn missing_risk_category_defaults_to_moderate() {
    let mut p = prediction(ResistanceLevel::Low, &[]);
    assert_eq!(assess_risk(&p).risk_category, "MODERATE");
    p.risk_category = "LOW".to_string();
    assert_eq!(assess_risk(&p).risk_category, "LOW");
}

#[test]
fn breakdown_sorts_descending_with_stable_ties() {
    let p = prediction(
        ResistanceLevel::Intermediate,
        &[
            (ResistanceLevel::Susceptible, 0.2),
            (ResistanceLevel::High, 0.2),
            (ResistanceLevel::Intermediate, 0.55),
            (ResistanceLevel::Low, 0.05),
        ],
    );
    let order: Vec<_> = probability_breakdown(&p).iter().map(|e| e.level).collect();
    assert_eq!(
        order,
        vec![
            ResistanceLevel::Intermediate,
            ResistanceLevel::High,
            ResistanceLevel::Susceptible,
            ResistanceLevel::Low,
        ]
    );
    assert_eq!(probability_breakdown(&p)[0].percent, 55.0);
}

#[test]
fn probabilities_must_sum_to_one() {
    let ok = prediction(
        ResistanceLevel::Susceptible,
        &[(ResistanceLevel::Susceptible, 0.7), (ResistanceLevel::Low, 0.295)],
    );
    assert!(validate_prediction(&ok).is_ok());

    let bad = prediction(
        ResistanceLevel::Susceptible,
        &[(ResistanceLevel::Susceptible, 0.5), (ResistanceLevel::Low, 0.2)],
    );
    assert!(matches!(
        validate_prediction(&bad),
        Err(EngineError::MalformedPrediction(_))
    ));
}

#[test]
fn empty_or_out_of_range_probabilities_are_rejected() {
    assert!(validate_prediction(&prediction(ResistanceLevel::High, &[])).is_err());
    let p = prediction(
        ResistanceLevel::High,
        &[(ResistanceLevel::High, 1.5), (ResistanceLevel::Low, -0.5)],
    );
    assert!(validate_prediction(&p).is_err());
}

#[test]
fn parse_prediction_rejects_bad_level_codes() {
    let body = r#"{"predicted_resistance_level": "Q", "total_mutations": 1, "all_probabilities": {"S": 1.0}}"#;
    assert!(matches!(
        parse_prediction(body),
        Err(EngineError::Serialization(_))
    ));

    let body = r#"{"predicted_resistance_level": "S", "total_mutations": 1, "all_probabilities": {"S": 1.0}}"#;
    assert_eq!(
        parse_prediction(body).unwrap().predicted_resistance_level,
        ResistanceLevel::Susceptible
    );
}

#[test]
fn cohort_splits_on_high_risk_score() {
    let summary = summarize_cohort(&[0.9, 0.6, 0.7, 0.1]);
    assert_eq!(summary.total_patients, 4);
    assert_eq!(summary.high_risk_count, 2);
    assert_eq!(summary.low_risk_count, 2);
    assert_eq!(summary.high_risk_percent, 50.0);

    let thirds = summarize_cohort(&[0.9, 0.1, 0.1]);
    assert_eq!(thirds.high_risk_percent, 33.3);
}

#[test]
fn empty_cohort_has_zero_percent() {
    let summary = summarize_cohort(&[]);
    assert_eq!(summary.total_patients, 0);
    assert_eq!(summary.high_risk_percent, 0.0);
}
