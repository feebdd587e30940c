//! `h2f-score` — the network health scoring engine.
//!
//! Converts a network type, a hydrogen-adoption percentage, and a pair of
//! global scaling factors into normalized `[0,1]` throughput and emission
//! scores, a combined health score, and the red→green color the map layers
//! render.  Every operation is a pure function of its inputs plus a borrowed
//! read-only [`NetworkAssumptions`](h2f_core::NetworkAssumptions) table:
//! no I/O, no logging, no shared mutable state, safe to call from any
//! number of threads.

pub mod engine;
pub mod error;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use engine::{ScoreEngine, ScoreInput, ScoreResult, combine_scores, score_to_color};
pub use error::ScoreError;
