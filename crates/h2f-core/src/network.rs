//! Freight network type enum shared across the scoring crates.
//!
//! The external assumptions format keys networks by lowercase snake-case
//! strings (`air`, `rail`, `road_interstate`, `road_urban`); those strings
//! round-trip through [`NetworkType::as_str`] and `FromStr`.  Inside the
//! engine the closed enum makes an unknown network unrepresentable, so the
//! "unknown key" failure class only exists at the parse boundary.

use crate::{CoreError, CoreResult};

/// One of the four freight transport networks in the scenario model.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkType {
    /// Domestic air freight.
    Air,
    /// Interstate rail freight corridors.
    Rail,
    /// Interstate road freight (line-haul trucking).
    RoadInterstate,
    /// Urban road freight (last-mile trucking).
    RoadUrban,
}

impl NetworkType {
    /// All variants, in display order.  Useful for exhaustive iteration
    /// when rendering one map layer per network.
    pub const ALL: [NetworkType; 4] = [
        NetworkType::Air,
        NetworkType::Rail,
        NetworkType::RoadInterstate,
        NetworkType::RoadUrban,
    ];

    /// The snake-case key used by the external assumptions format.
    pub fn as_str(self) -> &'static str {
        match self {
            NetworkType::Air            => "air",
            NetworkType::Rail           => "rail",
            NetworkType::RoadInterstate => "road_interstate",
            NetworkType::RoadUrban      => "road_urban",
        }
    }
}

impl std::str::FromStr for NetworkType {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim() {
            "air"             => Ok(NetworkType::Air),
            "rail"            => Ok(NetworkType::Rail),
            "road_interstate" => Ok(NetworkType::RoadInterstate),
            "road_urban"      => Ok(NetworkType::RoadUrban),
            other => Err(CoreError::InvalidArgument(format!(
                "unknown network type {other:?}"
            ))),
        }
    }
}

impl std::fmt::Display for NetworkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
