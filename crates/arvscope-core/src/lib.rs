//! arvscope-core
//!
//! Pure domain types for HIV drug-resistance assessments. No engine logic and
//! no I/O. This is the shared vocabulary between the scoring engine, the CLI,
//! and the mobile UI (via the generated TypeScript bindings).

pub mod error;
pub mod models;
