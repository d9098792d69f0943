use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown drug class: {0}")]
    UnknownDrugClass(String),

    #[error("unknown resistance level code: {0}")]
    UnknownResistanceLevel(String),
}
