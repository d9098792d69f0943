use arvscope_core::models::clinical::{ClinicalProfile, Sex};
use arvscope_core::models::mutation::MutationProfile;
use arvscope_engine::drivers::{FAVORABLE_BURDEN, FAVORABLE_REGIMEN, explain_drivers};

fn clinical(viral_load: f64, cd4_count: f64) -> ClinicalProfile {
    ClinicalProfile {
        age: 38,
        sex: Sex::Male,
        viral_load,
        cd4_count,
        art_duration_months: 24.0,
        art_regimen: "TDF + 3TC + EFV".to_string(),
    }
}

fn texts(profile: MutationProfile, clinical: ClinicalProfile, total: u32) -> Vec<String> {
    explain_drivers(&profile, &clinical, total)
        .into_iter()
        .map(|d| d.text)
        .collect()
}

#[test]
fn favorable_profile_gets_the_two_fallbacks() {
    let drivers = texts(MutationProfile::new(1, 1, 1), clinical(400.0, 650.0), 3);
    assert_eq!(drivers, vec![FAVORABLE_BURDEN, FAVORABLE_REGIMEN]);
}

#[test]
fn drivers_follow_rule_order() {
    let drivers = texts(MutationProfile::new(9, 4, 5), clinical(125_000.0, 150.0), 18);
    assert_eq!(
        drivers,
        vec![
            "High NRTI mutations (4) indicating resistance to nucleoside drugs",
            "Elevated PI mutations (9) affecting protease inhibitor efficacy",
            "NNRTI mutations (5) limiting non-nucleoside options",
            "High viral load (125,000 copies/mL) indicates active viral replication",
            "Low CD4+ count (150 cells/μL) suggests advanced immunosuppression",
            "Total mutation count (18) exceeds threshold for treatment modification",
        ]
    );
}

#[test]
fn lab_thresholds_are_strict() {
    let drivers = texts(MutationProfile::default(), clinical(50_000.0, 200.0), 0);
    assert_eq!(drivers, vec![FAVORABLE_BURDEN, FAVORABLE_REGIMEN]);
}

#[test]
fn total_rule_uses_the_supplied_total() {
    let drivers = texts(MutationProfile::new(1, 1, 1), clinical(0.0, 500.0), 8);
    assert_eq!(
        drivers,
        vec!["Total mutation count (8) exceeds threshold for treatment modification"]
    );
}

#[test]
fn viral_load_is_grouped_in_thousands() {
    let drivers = texts(MutationProfile::default(), clinical(1_234_567.9, 500.0), 0);
    assert_eq!(
        drivers,
        vec!["High viral load (1,234,567 copies/mL) indicates active viral replication"]
    );
}
