//! Coercion of raw form input into validated profiles.
//!
//! Form fields arrive as numbers or free text. A field that is absent is an
//! error; a field that is present but unusable (negative, non-numeric) is
//! clamped to zero.

use arvscope_core::models::clinical::{ClinicalProfile, Sex};
use arvscope_core::models::mutation::MutationProfile;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::EngineError;

/// A raw form value: either a JSON number or the text the user typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum FormValue {
    Number(f64),
    Text(String),
}

impl FormValue {
    fn is_blank(&self) -> bool {
        matches!(self, FormValue::Text(text) if text.trim().is_empty())
    }

    /// Integer reading of the value, truncated toward zero. `None` when the
    /// value carries no number at all.
    fn as_integer(&self) -> Option<i64> {
        match self {
            FormValue::Number(n) if n.is_finite() => Some(n.trunc() as i64),
            FormValue::Number(_) => None,
            FormValue::Text(text) => leading_integer(text),
        }
    }

    fn as_float(&self) -> Option<f64> {
        match self {
            FormValue::Number(n) => Some(*n).filter(|n| n.is_finite()),
            FormValue::Text(text) => text.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }
}

/// Parses the leading signed integer of `text`, so `"3.7"` reads as 3 and
/// `"12 mutations"` as 12.
fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits: &str = &rest[..rest.bytes().take_while(u8::is_ascii_digit).count()];
    if digits.is_empty() {
        return None;
    }
    // Saturate rather than fail on absurdly long digit strings.
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Mutation counts as submitted by the resistance-data form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MutationForm {
    pub pi_count: Option<FormValue>,
    pub nrti_count: Option<FormValue>,
    pub nnrti_count: Option<FormValue>,
}

pub fn normalize_mutations(form: &MutationForm) -> Result<MutationProfile, EngineError> {
    Ok(MutationProfile::new(
        required_count("pi_count", form.pi_count.as_ref())?,
        required_count("nrti_count", form.nrti_count.as_ref())?,
        required_count("nnrti_count", form.nnrti_count.as_ref())?,
    ))
}

fn required_count(field: &str, value: Option<&FormValue>) -> Result<u32, EngineError> {
    let value = value.ok_or_else(|| EngineError::MissingField(field.to_string()))?;
    Ok(coerce_count(field, value))
}

fn coerce_count(field: &str, value: &FormValue) -> u32 {
    match value.as_integer() {
        Some(n) if n >= 0 => u32::try_from(n).unwrap_or(u32::MAX),
        _ => {
            tracing::debug!(field, ?value, "clamping unusable count to 0");
            0
        }
    }
}

fn coerce_non_negative(field: &str, value: &FormValue) -> f64 {
    match value.as_float() {
        Some(n) if n >= 0.0 => n,
        _ => {
            tracing::debug!(field, ?value, "clamping unusable measurement to 0");
            0.0
        }
    }
}

/// Clinical parameters as submitted by the patient and clinical-data forms.
///
/// `None` means "unanswered"; blank text is treated the same way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalForm {
    pub age: Option<FormValue>,
    pub sex: Option<Sex>,
    pub viral_load: Option<FormValue>,
    pub cd4_count: Option<FormValue>,
    pub art_duration_months: Option<FormValue>,
    pub art_regimen: Option<String>,
}

pub fn normalize_clinical(form: &ClinicalForm) -> Result<ClinicalProfile, EngineError> {
    let age_value = answered("age", form.age.as_ref())?;
    let age = coerce_count("age", age_value);

    let sex = form
        .sex
        .ok_or_else(|| EngineError::MissingField("sex".to_string()))?;
    let viral_load = coerce_non_negative("viral_load", answered("viral_load", form.viral_load.as_ref())?);
    let cd4_count = coerce_non_negative("cd4_count", answered("cd4_count", form.cd4_count.as_ref())?);
    let art_duration_months = form
        .art_duration_months
        .as_ref()
        .filter(|value| !value.is_blank())
        .map(|value| coerce_non_negative("art_duration_months", value))
        .unwrap_or(0.0);

    let profile = ClinicalProfile {
        age,
        sex,
        viral_load,
        cd4_count,
        art_duration_months,
        art_regimen: form.art_regimen.clone().unwrap_or_default(),
    };
    validate_clinical(&profile)?;
    Ok(profile)
}

fn answered<'a>(field: &str, value: Option<&'a FormValue>) -> Result<&'a FormValue, EngineError> {
    value
        .filter(|value| !value.is_blank())
        .ok_or_else(|| EngineError::MissingField(field.to_string()))
}

/// Check an already-typed clinical profile: age must be positive and every
/// lab value finite and non-negative.
pub fn validate_clinical(profile: &ClinicalProfile) -> Result<(), EngineError> {
    if profile.age == 0 {
        return Err(EngineError::InvalidField {
            field: "age".to_string(),
            reason: "must be a positive number of years".to_string(),
        });
    }

    let measurements = [
        ("viral_load", profile.viral_load),
        ("cd4_count", profile.cd4_count),
        ("art_duration_months", profile.art_duration_months),
    ];
    for (field, value) in measurements {
        if !value.is_finite() || value < 0.0 {
            return Err(EngineError::InvalidField {
                field: field.to_string(),
                reason: format!("{value} is not a non-negative number"),
            });
        }
    }

    Ok(())
}
