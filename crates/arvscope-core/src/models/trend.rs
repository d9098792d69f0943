use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One past assessment as returned by the history endpoint, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrendPoint {
    /// Risk stage, expected in `1..=4`.
    pub value: i64,
    pub label: String,
}

impl TrendPoint {
    pub fn new(value: i64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Risk stage of a historical assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum TrendRiskLevel {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Moderate Risk")]
    Moderate,
    #[serde(rename = "High Risk")]
    High,
    #[serde(rename = "Very High Risk")]
    VeryHigh,
}

impl TrendRiskLevel {
    pub const ALL: [TrendRiskLevel; 4] = [
        TrendRiskLevel::Low,
        TrendRiskLevel::Moderate,
        TrendRiskLevel::High,
        TrendRiskLevel::VeryHigh,
    ];

    /// Unexpected stage values fall back to `Low`.
    pub fn from_value(value: i64) -> Self {
        match value {
            4 => TrendRiskLevel::VeryHigh,
            3 => TrendRiskLevel::High,
            2 => TrendRiskLevel::Moderate,
            _ => TrendRiskLevel::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrendRiskLevel::Low => "Low Risk",
            TrendRiskLevel::Moderate => "Moderate Risk",
            TrendRiskLevel::High => "High Risk",
            TrendRiskLevel::VeryHigh => "Very High Risk",
        }
    }

    pub fn guidance(&self) -> &'static str {
        match self {
            TrendRiskLevel::Low => "Minimal risk - Keep up good practices",
            TrendRiskLevel::Moderate => "Moderate risk - Consider preventive measures",
            TrendRiskLevel::High => "High risk - Take immediate action",
            TrendRiskLevel::VeryHigh => "Very high risk - Seek clinical guidance",
        }
    }
}

impl fmt::Display for TrendRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum TrendDirection {
    Improving,
    Worsening,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrendSummary {
    pub total_assessments: u32,
    /// Label of the newest point, or `"No Data"` for an empty history.
    pub latest_risk_level: String,
    /// Advice for the newest level; `None` for an empty history.
    pub latest_guidance: Option<String>,
    pub trend_direction: TrendDirection,
    /// Newest value minus the one before it; 0 with fewer than two points.
    pub trend_delta: i64,
    /// Always carries all four levels, zero when unseen.
    pub risk_level_counts: BTreeMap<TrendRiskLevel, u32>,
}
