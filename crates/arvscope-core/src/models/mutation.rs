use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Antiretroviral drug class sharing a resistance-mutation signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DrugClass {
    /// Protease inhibitors.
    #[serde(rename = "PI")]
    Pi,
    /// Nucleoside reverse transcriptase inhibitors.
    #[serde(rename = "NRTI")]
    Nrti,
    /// Non-nucleoside reverse transcriptase inhibitors.
    #[serde(rename = "NNRTI")]
    Nnrti,
}

impl DrugClass {
    /// Every class, in reporting order.
    pub const ALL: [DrugClass; 3] = [DrugClass::Pi, DrugClass::Nrti, DrugClass::Nnrti];

    pub fn code(&self) -> &'static str {
        match self {
            DrugClass::Pi => "PI",
            DrugClass::Nrti => "NRTI",
            DrugClass::Nnrti => "NNRTI",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|class| class.code() == code)
            .ok_or_else(|| CoreError::UnknownDrugClass(code.to_string()))
    }
}

impl fmt::Display for DrugClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Per-class resistance mutation counts for one patient sample.
///
/// The total is always derived from the parts; it is never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MutationProfile {
    pub pi_count: u32,
    pub nrti_count: u32,
    pub nnrti_count: u32,
}

impl MutationProfile {
    pub fn new(pi_count: u32, nrti_count: u32, nnrti_count: u32) -> Self {
        Self {
            pi_count,
            nrti_count,
            nnrti_count,
        }
    }

    pub fn count(&self, class: DrugClass) -> u32 {
        match class {
            DrugClass::Pi => self.pi_count,
            DrugClass::Nrti => self.nrti_count,
            DrugClass::Nnrti => self.nnrti_count,
        }
    }

    /// Saturates at `u32::MAX` instead of overflowing.
    pub fn total_mutations(&self) -> u32 {
        self.pi_count
            .saturating_add(self.nrti_count)
            .saturating_add(self.nnrti_count)
    }
}
