//! `LINESTRING` extraction from raw text lines.
//!
//! The source CSVs embed WKT inside quoted columns, so a geometry line looks
//! like `Hume Hwy,"LINESTRING (144.96 -37.81, 145.00 -37.75)",2020`.  The
//! extractor pattern-matches the `LINESTRING (…)` span anywhere in the line
//! rather than parsing the CSV structure around it.
//!
//! Axis order is `lng lat` in the WKT source and stays `[lng, lat]` all the
//! way through to GeoJSON (RFC 7946 order).  Any display-layer `lat/lng`
//! re-ordering is the consumer's business.

use std::sync::OnceLock;

use geo_types::{Coord, LineString};
use regex::Regex;

use crate::{GeomError, GeomResult};

fn linestring_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"LINESTRING \((.*)\)").expect("linestring pattern compiles")
    })
}

/// Extract the `LINESTRING (…)` span from `text`, if present.
///
/// Returns the raw coordinate-list capture.  `None` means the line carries
/// no linestring at all (header/metadata rows) — the batch converter treats
/// that as skip, not error.
pub(crate) fn extract_coordinate_list(text: &str) -> Option<&str> {
    linestring_pattern()
        .captures(text)
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
}

/// Parse a `LINESTRING (x1 y1, x2 y2, …)` out of `text`.
///
/// Point order is preserved exactly — it defines path direction.
///
/// # Errors
///
/// [`GeomError::MalformedGeometry`] if no `LINESTRING (…)` pattern is
/// present, or any point token does not yield exactly two finite ordinates.
pub fn parse_linestring_wkt(text: &str) -> GeomResult<LineString<f64>> {
    let list = extract_coordinate_list(text).ok_or_else(|| {
        GeomError::MalformedGeometry("no LINESTRING (...) pattern".to_string())
    })?;
    parse_coordinate_list(list)
}

/// Parse the inside of the parentheses: `"x1 y1, x2 y2, …"`.
pub(crate) fn parse_coordinate_list(list: &str) -> GeomResult<LineString<f64>> {
    let mut coords = Vec::new();

    for token in list.split(", ") {
        let mut ordinates = token.split_whitespace();
        let (Some(lng), Some(lat), None) =
            (ordinates.next(), ordinates.next(), ordinates.next())
        else {
            return Err(GeomError::MalformedGeometry(format!(
                "point {token:?} is not two ordinates"
            )));
        };
        coords.push(Coord {
            x: parse_ordinate(lng)?,
            y: parse_ordinate(lat)?,
        });
    }

    Ok(LineString::from(coords))
}

/// Serialize back to `LINESTRING (x1 y1, x2 y2, …)` form.
///
/// Inverse of [`parse_linestring_wkt`]: parsing the output yields the same
/// coordinate sequence.
pub fn linestring_to_wkt(line: &LineString<f64>) -> String {
    let points: Vec<String> = line
        .coords()
        .map(|c| format!("{} {}", c.x, c.y))
        .collect();
    format!("LINESTRING ({})", points.join(", "))
}

fn parse_ordinate(token: &str) -> GeomResult<f64> {
    let value: f64 = token.parse().map_err(|_| {
        GeomError::MalformedGeometry(format!("ordinate {token:?} is not a number"))
    })?;
    if !value.is_finite() {
        return Err(GeomError::MalformedGeometry(format!(
            "ordinate {token:?} is not finite"
        )));
    }
    Ok(value)
}
