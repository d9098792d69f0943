use arvscope_core::models::clinical::ClinicalProfile;
use arvscope_core::models::mutation::MutationProfile;
use arvscope_core::models::treatment::KeyDriver;

use crate::thresholds::{
    DRIVER_CD4_BELOW, DRIVER_CLASS_MUTATIONS, DRIVER_TOTAL_MUTATIONS, DRIVER_VIRAL_LOAD_ABOVE,
};

pub const FAVORABLE_BURDEN: &str = "Low mutation burden suggests good treatment response";
pub const FAVORABLE_REGIMEN: &str = "Current regimen appears effective based on resistance profile";

/// Explain which inputs drove the classification.
///
/// Drivers come out in rule-declaration order, never sorted by magnitude.
/// `total_mutations` is taken as given; it may differ from
/// `mutations.total_mutations()`.
pub fn explain_drivers(
    mutations: &MutationProfile,
    clinical: &ClinicalProfile,
    total_mutations: u32,
) -> Vec<KeyDriver> {
    let mut drivers = Vec::new();

    if mutations.nrti_count >= DRIVER_CLASS_MUTATIONS {
        drivers.push(KeyDriver::new(format!(
            "High NRTI mutations ({}) indicating resistance to nucleoside drugs",
            mutations.nrti_count
        )));
    }
    if mutations.pi_count >= DRIVER_CLASS_MUTATIONS {
        drivers.push(KeyDriver::new(format!(
            "Elevated PI mutations ({}) affecting protease inhibitor efficacy",
            mutations.pi_count
        )));
    }
    if mutations.nnrti_count >= DRIVER_CLASS_MUTATIONS {
        drivers.push(KeyDriver::new(format!(
            "NNRTI mutations ({}) limiting non-nucleoside options",
            mutations.nnrti_count
        )));
    }
    if clinical.viral_load > DRIVER_VIRAL_LOAD_ABOVE {
        drivers.push(KeyDriver::new(format!(
            "High viral load ({} copies/mL) indicates active viral replication",
            group_thousands(clinical.viral_load.trunc() as u64)
        )));
    }
    if clinical.cd4_count < DRIVER_CD4_BELOW {
        drivers.push(KeyDriver::new(format!(
            "Low CD4+ count ({} cells/μL) suggests advanced immunosuppression",
            clinical.cd4_count
        )));
    }
    if total_mutations >= DRIVER_TOTAL_MUTATIONS {
        drivers.push(KeyDriver::new(format!(
            "Total mutation count ({total_mutations}) exceeds threshold for treatment modification"
        )));
    }

    if drivers.is_empty() {
        drivers.push(KeyDriver::new(FAVORABLE_BURDEN));
        drivers.push(KeyDriver::new(FAVORABLE_REGIMEN));
    } else {
        tracing::debug!(count = drivers.len(), "key drivers fired");
    }

    drivers
}

/// `1234567` → `"1,234,567"`.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
