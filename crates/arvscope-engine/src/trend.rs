use std::collections::BTreeMap;

use arvscope_core::models::trend::{TrendDirection, TrendPoint, TrendRiskLevel, TrendSummary};
use serde_json::Value;

use crate::error::EngineError;

pub const NO_DATA: &str = "No Data";

/// Summarize an oldest-first sequence of past assessments.
///
/// Direction compares the last two points only.
pub fn summarize_trend(points: &[TrendPoint]) -> TrendSummary {
    let mut counts: BTreeMap<TrendRiskLevel, u32> =
        TrendRiskLevel::ALL.into_iter().map(|level| (level, 0)).collect();
    for point in points {
        *counts.entry(TrendRiskLevel::from_value(point.value)).or_insert(0) += 1;
    }

    let latest = points
        .last()
        .map(|point| TrendRiskLevel::from_value(point.value));
    let latest_risk_level = latest
        .map(|level| level.label().to_string())
        .unwrap_or_else(|| NO_DATA.to_string());

    let trend_delta = match points {
        [.., previous, last] => last.value.saturating_sub(previous.value),
        _ => 0,
    };
    let trend_direction = match trend_delta.signum() {
        -1 => TrendDirection::Improving,
        1 => TrendDirection::Worsening,
        _ => TrendDirection::Stable,
    };

    TrendSummary {
        total_assessments: u32::try_from(points.len()).unwrap_or(u32::MAX),
        latest_risk_level,
        latest_guidance: latest.map(|level| level.guidance().to_string()),
        trend_direction,
        trend_delta,
        risk_level_counts: counts,
    }
}

/// Decode the raw history payload into trend points.
///
/// Entries missing a usable `value` count as stage 1; entries without a
/// `label` get `Assess {n}`.
pub fn parse_history(payload: &Value) -> Result<Vec<TrendPoint>, EngineError> {
    let items = payload.as_array().ok_or_else(|| {
        EngineError::MalformedHistory(format!("expected an array, got {}", json_kind(payload)))
    })?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let entry = item.as_object().ok_or_else(|| {
                EngineError::MalformedHistory(format!(
                    "entry {i} is {}, not an object",
                    json_kind(item)
                ))
            })?;
            let value = entry
                .get("value")
                .and_then(stage_value)
                .filter(|v| *v != 0)
                .unwrap_or(1);
            let label = entry
                .get("label")
                .and_then(Value::as_str)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("Assess {}", i + 1));
            Ok(TrendPoint { value, label })
        })
        .collect()
}

/// Like [`summarize_trend`] over a raw payload. Malformed history is
/// logged and recovered as an empty summary.
pub fn summarize_history(payload: &Value) -> TrendSummary {
    match parse_history(payload) {
        Ok(points) => summarize_trend(&points),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring malformed assessment history");
            summarize_trend(&[])
        }
    }
}

/// Integer stage, also accepting whole-valued floats such as `2.0`.
fn stage_value(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|v| v.is_finite() && v.fract() == 0.0)
            .map(|v| v as i64)
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
