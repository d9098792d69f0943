//! arvscope-cli
//!
//! Command-line host for the resistance engine: config loading, logging
//! setup, and JSON in/out. All scoring lives in `arvscope-engine`.

pub mod commands;
pub mod config;
