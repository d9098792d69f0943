use arvscope_core::models::clinical::Sex;
use arvscope_engine::error::EngineError;
use arvscope_engine::normalize::{
    ClinicalForm, FormValue, MutationForm, normalize_clinical, normalize_mutations,
    validate_clinical,
};

fn text(s: &str) -> Option<FormValue> {
    Some(FormValue::Text(s.to_string()))
}

fn number(n: f64) -> Option<FormValue> {
    Some(FormValue::Number(n))
}

#[test]
fn counts_accept_numbers_and_text() {
    let form = MutationForm {
        pi_count: number(2.0),
        nrti_count: text(" 5 "),
        nnrti_count: text("3.7"),
    };
    let profile = normalize_mutations(&form).unwrap();
    assert_eq!(profile.pi_count, 2);
    assert_eq!(profile.nrti_count, 5);
    assert_eq!(profile.nnrti_count, 3);
    assert_eq!(profile.total_mutations(), 10);
}

#[test]
fn negative_and_non_numeric_counts_clamp_to_zero() {
    let form = MutationForm {
        pi_count: number(-4.0),
        nrti_count: text("abc"),
        nnrti_count: text("-2"),
    };
    let profile = normalize_mutations(&form).unwrap();
    assert_eq!(profile.total_mutations(), 0);
}

#[test]
fn zero_is_not_missing() {
    let form = MutationForm {
        pi_count: number(0.0),
        nrti_count: number(0.0),
        nnrti_count: text(""),
    };
    assert!(normalize_mutations(&form).is_ok());
}

#[test]
fn absent_count_is_a_validation_error() {
    let form = MutationForm {
        pi_count: number(1.0),
        nrti_count: None,
        nnrti_count: number(1.0),
    };
    assert!(matches!(
        normalize_mutations(&form),
        Err(EngineError::MissingField(field)) if field == "nrti_count"
    ));
}

#[test]
fn mutation_form_deserializes_mixed_json() {
    let form: MutationForm =
        serde_json::from_str(r#"{"pi_count": 1, "nrti_count": "2", "nnrti_count": null}"#).unwrap();
    assert_eq!(form.nrti_count, text("2"));
    assert!(form.nnrti_count.is_none());
}

fn clinical_form() -> ClinicalForm {
    ClinicalForm {
        age: text("45"),
        sex: Some(Sex::Female),
        viral_load: text("100000"),
        cd4_count: number(120.0),
        art_duration_months: None,
        art_regimen: Some("2NRTIs+NNRTIs".to_string()),
    }
}

#[test]
fn clinical_form_normalizes() {
    let profile = normalize_clinical(&clinical_form()).unwrap();
    assert_eq!(profile.age, 45);
    assert_eq!(profile.viral_load, 100_000.0);
    assert_eq!(profile.cd4_count, 120.0);
    assert_eq!(profile.art_duration_months, 0.0);
    assert_eq!(profile.art_regimen, "2NRTIs+NNRTIs");
}

#[test]
fn blank_viral_load_is_missing() {
    let form = ClinicalForm {
        viral_load: text("  "),
        ..clinical_form()
    };
    assert!(matches!(
        normalize_clinical(&form),
        Err(EngineError::MissingField(field)) if field == "viral_load"
    ));
}

#[test]
fn zero_age_is_invalid() {
    let form = ClinicalForm {
        age: number(0.0),
        ..clinical_form()
    };
    assert!(matches!(
        normalize_clinical(&form),
        Err(EngineError::InvalidField { field, .. }) if field == "age"
    ));
}

#[test]
fn negative_lab_values_clamp_to_zero() {
    let form = ClinicalForm {
        cd4_count: number(-50.0),
        ..clinical_form()
    };
    assert_eq!(normalize_clinical(&form).unwrap().cd4_count, 0.0);
}

#[test]
fn huge_counts_saturate_without_overflowing_the_total() {
    let form = MutationForm {
        pi_count: text("5000000000"),
        nrti_count: text("5000000000"),
        nnrti_count: number(1.0),
    };
    let profile = normalize_mutations(&form).unwrap();
    assert_eq!(profile.pi_count, u32::MAX);
    assert_eq!(profile.nrti_count, u32::MAX);
    assert_eq!(profile.total_mutations(), u32::MAX);
}

#[test]
fn normalized_profiles_pass_validation() {
    let profile = normalize_clinical(&clinical_form()).unwrap();
    assert!(validate_clinical(&profile).is_ok());

    let mut profile = profile;
    profile.art_duration_months = f64::NAN;
    assert!(matches!(
        validate_clinical(&profile),
        Err(EngineError::InvalidField { field, .. }) if field == "art_duration_months"
    ));
}
