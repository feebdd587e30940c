//! Scoring-engine error type.

use thiserror::Error;

/// Errors produced by `h2f-score`.
///
/// All of these are caller bugs, not data errors: inputs are expected to be
/// range-checked at the UI boundary before they reach the engine.
#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    #[error("no metric scores to combine")]
    EmptyInput,

    #[error("hydrogen uptake must be 0-100 %, got {0}")]
    UptakeOutOfRange(u8),

    #[error("{name} must be a finite non-negative number, got {value}")]
    InvalidFactor { name: &'static str, value: f64 },
}
