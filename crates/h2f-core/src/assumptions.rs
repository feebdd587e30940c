//! Baseline physical assumptions per network type.
//!
//! # External format
//!
//! Assumption tables arrive as JSON mapping metric name → network-type key →
//! numeric string:
//!
//! ```json
//! {
//!   "tonne.km/hr":   { "air": "100000", "rail": "300000",
//!                      "road_interstate": "1500", "road_urban": "180" },
//!   "gco2/tonne.km": { "air": "602", "rail": "22",
//!                      "road_interstate": "62", "road_urban": "50" }
//! }
//! ```
//!
//! Values are strings in the source format; [`NetworkAssumptions::from_json_str`]
//! parses and validates them (every network present under both metrics, every
//! value a positive finite float).  The table is constructed once at startup
//! and passed by reference into the scoring engine — there is no ambient
//! global table.
//!
//! The built-in [`Default`] table is the ECTA/CEFIC-guideline revision
//! (<https://www.ecta.com/wp-content/uploads/2021/03/ECTA-CEFIC-GUIDELINE-FOR-MEASURING-AND-MANAGING-CO2-ISSUE-1.pdf>).

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use crate::{CoreError, CoreResult, NetworkType};

/// JSON metric key for throughput baselines.
pub const METRIC_THROUGHPUT: &str = "tonne.km/hr";
/// JSON metric key for emission-intensity baselines.
pub const METRIC_EMISSION: &str = "gco2/tonne.km";

// ── Baselines ─────────────────────────────────────────────────────────────────

/// The two baseline constants for one network type.
#[derive(Copy, Clone, PartialEq, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Baselines {
    /// Tonne·km transportable per hour under full fossil operation (> 0).
    pub throughput: f64,
    /// Grams CO2 per tonne·km under full fossil operation (> 0).
    pub emission: f64,
}

// ── NetworkAssumptions ────────────────────────────────────────────────────────

/// Read-only baseline table covering all four [`NetworkType`]s.
///
/// Cheap to copy; the scoring engine borrows it for its lifetime.
#[derive(Copy, Clone, PartialEq, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct NetworkAssumptions {
    // Indexed in NetworkType::ALL order.
    table: [Baselines; 4],
}

impl Default for NetworkAssumptions {
    /// The canonical published table (see module docs for provenance).
    fn default() -> Self {
        Self {
            table: [
                Baselines { throughput: 100_000.0, emission: 602.0 }, // air
                Baselines { throughput: 300_000.0, emission: 22.0 },  // rail
                Baselines { throughput: 1_500.0,   emission: 62.0 },  // road_interstate
                Baselines { throughput: 180.0,     emission: 50.0 },  // road_urban
            ],
        }
    }
}

impl NetworkAssumptions {
    /// Build a table from explicit per-network baselines.
    ///
    /// # Errors
    ///
    /// [`CoreError::Config`] if any baseline is non-finite or ≤ 0.
    pub fn new(entries: [(NetworkType, Baselines); 4]) -> CoreResult<Self> {
        let mut table = [Baselines { throughput: 0.0, emission: 0.0 }; 4];
        let mut seen = [false; 4];

        for (network, baselines) in entries {
            validate_baseline(network, METRIC_THROUGHPUT, baselines.throughput)?;
            validate_baseline(network, METRIC_EMISSION, baselines.emission)?;
            let idx = network as usize;
            if seen[idx] {
                return Err(CoreError::Config(format!(
                    "duplicate entry for network {network}"
                )));
            }
            seen[idx] = true;
            table[idx] = baselines;
        }
        // `seen` is all-true: four entries, no duplicates.
        Ok(Self { table })
    }

    /// Load and validate a table from the external JSON format.
    pub fn from_json_str(text: &str) -> CoreResult<Self> {
        let raw: HashMap<String, HashMap<String, String>> =
            serde_json::from_str(text).map_err(|e| CoreError::Parse(e.to_string()))?;

        for metric in raw.keys() {
            if metric != METRIC_THROUGHPUT && metric != METRIC_EMISSION {
                return Err(CoreError::Config(format!("unknown metric {metric:?}")));
            }
        }

        let throughput = metric_section(&raw, METRIC_THROUGHPUT)?;
        let emission = metric_section(&raw, METRIC_EMISSION)?;

        let mut table = [Baselines { throughput: 0.0, emission: 0.0 }; 4];
        for network in NetworkType::ALL {
            table[network as usize] = Baselines {
                throughput: metric_value(throughput, network, METRIC_THROUGHPUT)?,
                emission:   metric_value(emission, network, METRIC_EMISSION)?,
            };
        }
        Ok(Self { table })
    }

    /// Like [`from_json_str`](Self::from_json_str) but accepts any `Read`
    /// source.  Useful for testing (pass a `std::io::Cursor`).
    pub fn from_reader<R: Read>(mut reader: R) -> CoreResult<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_json_str(&text)
    }

    /// Load from a JSON file on disk.
    pub fn from_json_file(path: &Path) -> CoreResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Both baselines for `network`.
    #[inline]
    pub fn baselines(&self, network: NetworkType) -> Baselines {
        self.table[network as usize]
    }

    /// Tonne·km/hr baseline for `network`.
    #[inline]
    pub fn throughput_baseline(&self, network: NetworkType) -> f64 {
        self.table[network as usize].throughput
    }

    /// gCO2/tonne·km baseline for `network`.
    #[inline]
    pub fn emission_baseline(&self, network: NetworkType) -> f64 {
        self.table[network as usize].emission
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn metric_section<'a>(
    raw: &'a HashMap<String, HashMap<String, String>>,
    metric: &str,
) -> CoreResult<&'a HashMap<String, String>> {
    raw.get(metric)
        .ok_or_else(|| CoreError::Config(format!("missing metric {metric:?}")))
}

fn metric_value(
    section: &HashMap<String, String>,
    network: NetworkType,
    metric: &str,
) -> CoreResult<f64> {
    let text = section.get(network.as_str()).ok_or_else(|| {
        CoreError::Config(format!("metric {metric:?} missing network {network:?}"))
    })?;
    let value: f64 = text.trim().parse().map_err(|_| {
        CoreError::Parse(format!(
            "metric {metric:?}, network {network}: {text:?} is not a number"
        ))
    })?;
    validate_baseline(network, metric, value)?;
    Ok(value)
}

fn validate_baseline(network: NetworkType, metric: &str, value: f64) -> CoreResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CoreError::Config(format!(
            "metric {metric:?}, network {network}: baseline must be a positive \
             finite number, got {value}"
        )));
    }
    Ok(())
}
