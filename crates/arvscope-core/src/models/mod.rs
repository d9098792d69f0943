pub mod clinical;
pub mod cohort;
pub mod mutation;
pub mod prediction;
pub mod report;
pub mod susceptibility;
pub mod treatment;
pub mod trend;
