//! `h2f-core` — foundational types for the `h2freight` scenario crates.
//!
//! This crate is a dependency of every other `h2f-*` crate.  It intentionally
//! has no `h2f-*` dependencies and minimal external ones (only `serde`,
//! `serde_json`, and `thiserror`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`network`]     | `NetworkType` enum (air / rail / road variants)       |
//! | [`assumptions`] | `NetworkAssumptions` baseline table + JSON loader     |
//! | [`color`]       | `Rgb` map-layer color triple                          |
//! | [`error`]       | `CoreError`, `CoreResult`                             |

pub mod assumptions;
pub mod color;
pub mod error;
pub mod network;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use assumptions::{Baselines, NetworkAssumptions};
pub use color::Rgb;
pub use error::{CoreError, CoreResult};
pub use network::NetworkType;
