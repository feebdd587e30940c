//! `h2f-geom` — geometry conversion for h2freight map layers.
//!
//! The raw freight-route datasets arrive as CSV dumps with a WKT
//! `LINESTRING` column, far too heavy for browser-side map rendering.
//! This crate holds the offline pre-processing pipeline:
//!
//! 1. [`wkt`] — extract `LINESTRING` coordinate sequences from raw text
//!    lines (tolerant of the CSV quoting around them).
//! 2. [`convert`] — re-emit parsed lines as a GeoJSON `FeatureCollection`.
//! 3. [`simplify`] — drop near-point artifacts by bounding-box size and
//!    thin the remaining geometries with Douglas–Peucker.
//!
//! All operations are pure: inputs are borrowed, outputs are fresh values,
//! nothing logs or touches the filesystem.  File handling lives in the
//! `h2f-cli` binary.

pub mod convert;
pub mod error;
pub mod simplify;
pub mod wkt;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use convert::{LineFailure, to_feature_collection};
pub use error::{GeomError, GeomResult};
pub use simplify::{
    DEFAULT_BOUND_THRESHOLD, DEFAULT_SIMPLIFY_TOLERANCE, filter_and_simplify, large_enough,
    simplify_geojson_str,
};
pub use wkt::{linestring_to_wkt, parse_linestring_wkt};
