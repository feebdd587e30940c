//! Batch WKT-lines → GeoJSON `FeatureCollection` conversion.
//!
//! The source files interleave geometry rows with headers and metadata, so
//! lines without a `LINESTRING` pattern are skipped silently.  Lines that
//! *do* carry a pattern but fail to parse are collected as per-line
//! failures rather than aborting the batch — one bad row must not sink the
//! other several thousand.  The caller decides what to do with the
//! failures (the CLI logs them as warnings).

use geojson::{Feature, FeatureCollection, Geometry};

use crate::wkt::{extract_coordinate_list, parse_coordinate_list};
use crate::GeomError;

/// One input line that matched the `LINESTRING` pattern but failed to parse.
#[derive(Debug)]
pub struct LineFailure {
    /// 1-based input line number.
    pub line: usize,
    pub error: GeomError,
}

impl std::fmt::Display for LineFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.error)
    }
}

/// Convert raw text lines into a GeoJSON `FeatureCollection`.
///
/// Each parsed linestring becomes one `Feature` with empty properties and
/// coordinates in `[lng, lat]` order; feature order follows input order.
/// The result serializes to valid JSON for any feature count, including
/// zero.
pub fn to_feature_collection<I, S>(lines: I) -> (FeatureCollection, Vec<LineFailure>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut features = Vec::new();
    let mut failures = Vec::new();

    for (idx, line) in lines.into_iter().enumerate() {
        let Some(list) = extract_coordinate_list(line.as_ref()) else {
            continue; // header/metadata row
        };
        match parse_coordinate_list(list) {
            Ok(linestring) => features.push(Feature {
                bbox: None,
                geometry: Some(Geometry::new(geojson::Value::from(&linestring))),
                id: None,
                properties: Some(serde_json::Map::new()),
                foreign_members: None,
            }),
            Err(error) => failures.push(LineFailure { line: idx + 1, error }),
        }
    }

    let collection = FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    };
    (collection, failures)
}
