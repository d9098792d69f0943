use arvscope_cli::commands;
use arvscope_core::models::trend::TrendDirection;

const REQUEST: &str = r#"{
    "mutations": {"pi_count": 0, "nrti_count": 1, "nnrti_count": 0},
    "clinical": {
        "age": 30,
        "sex": "Female",
        "viral_load": 40.0,
        "cd4_count": 700.0,
        "art_duration_months": 12.0,
        "art_regimen": "TDF/3TC/DTG"
    },
    "prediction": {
        "predicted_resistance_level": "S",
        "risk_category": "LOW",
        "total_mutations": 1,
        "all_probabilities": {"S": 0.92, "L": 0.05, "H": 0.03}
    }
}"#;

#[test]
fn evaluate_command_produces_report() {
    let report = commands::evaluate(REQUEST).unwrap();
    assert_eq!(
        report.plan.recommendations[0].details,
        "Continue TDF/3TC/DTG with regular monitoring"
    );
    assert_eq!(report.key_drivers.len(), 2);
}

#[test]
fn evaluate_command_rejects_invalid_json() {
    assert!(commands::evaluate("{not json").is_err());
}

#[test]
fn trend_command_recovers_from_wrong_shape() {
    let summary = commands::trend(r#"{"history": []}"#).unwrap();
    assert_eq!(summary.total_assessments, 0);
    assert_eq!(summary.latest_risk_level, "No Data");

    let summary = commands::trend(r#"[{"value": 3, "label": "a"}, {"value": 1, "label": "b"}]"#)
        .unwrap();
    assert_eq!(summary.trend_direction, TrendDirection::Improving);
}

#[test]
fn rendered_output_wraps_result_with_timestamp() {
    let summary = commands::cohort("[0.9, 0.2]").unwrap();
    let rendered = commands::render(summary, false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value["result"]["high_risk_count"], 1);
    assert!(value["generated_at"].is_string());
}
