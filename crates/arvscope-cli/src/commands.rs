use std::io::Read;
use std::path::Path;

use arvscope_core::models::cohort::CohortSummary;
use arvscope_core::models::report::{AssessmentRequest, ResistanceReport};
use arvscope_core::models::trend::TrendSummary;
use arvscope_engine::cohort::summarize_cohort;
use arvscope_engine::trend::summarize_history;
use serde::Serialize;

/// A command result stamped with when it was produced.
#[derive(Debug, Serialize)]
pub struct Output<T> {
    pub generated_at: jiff::Timestamp,
    pub result: T,
}

/// Read the command input from `path`, or stdin when absent.
pub fn read_input(path: Option<&Path>) -> eyre::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read {}: {e}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

pub fn evaluate(input: &str) -> eyre::Result<ResistanceReport> {
    let request: AssessmentRequest = serde_json::from_str(input)?;
    Ok(arvscope_engine::evaluate(&request)?)
}

/// History input that is not valid JSON is an error; JSON of the wrong
/// shape is recovered by the engine as an empty summary.
pub fn trend(input: &str) -> eyre::Result<TrendSummary> {
    let payload: serde_json::Value = serde_json::from_str(input)?;
    Ok(summarize_history(&payload))
}

pub fn cohort(input: &str) -> eyre::Result<CohortSummary> {
    let scores: Vec<f64> = serde_json::from_str(input)?;
    Ok(summarize_cohort(&scores))
}

pub fn render<T: Serialize>(result: T, pretty: bool) -> eyre::Result<String> {
    let output = Output {
        generated_at: jiff::Timestamp::now(),
        result,
    };
    let json = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    Ok(json)
}
