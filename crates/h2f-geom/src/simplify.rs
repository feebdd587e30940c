//! Bounding-box filtering and Douglas–Peucker simplification.
//!
//! Raw freight-route files carry thousands of vertices per route plus
//! near-point artifacts from the digitization process.  This pass drops
//! geometries whose bounding box is smaller than a threshold in both
//! dimensions, then thins the survivors with the `geo` crate's
//! Douglas–Peucker [`Simplify`], bounding positional deviation to the
//! given tolerance.  Run once offline, not per render.

use geo::{BoundingRect, Simplify};
use geo_types::Geometry;
use geojson::GeoJson;

use crate::{GeomError, GeomResult};

/// Minimum bounding-box extent (degrees) for a geometry to survive the
/// filter.  Width *or* height at or above this keeps the geometry.
pub const DEFAULT_BOUND_THRESHOLD: f64 = 0.1;

/// Douglas–Peucker tolerance (degrees).
pub const DEFAULT_SIMPLIFY_TOLERANCE: f64 = 1.0;

/// Filter a geometry collection by bounding-box size, then simplify each
/// survivor.
///
/// Inputs are untouched; the result is a fresh collection preserving the
/// relative order of retained geometries.
pub fn filter_and_simplify(
    geometries: &[Geometry<f64>],
    bound_threshold: f64,
    tolerance: f64,
) -> Vec<Geometry<f64>> {
    geometries
        .iter()
        .filter(|g| large_enough(g, bound_threshold))
        .map(|g| simplify_geometry(g, tolerance))
        .collect()
}

/// Whether some dimension of the geometry's bounding box reaches
/// `bound_threshold`.  Empty geometries (no bounding box) never qualify.
pub fn large_enough(geometry: &Geometry<f64>, bound_threshold: f64) -> bool {
    match geometry.bounding_rect() {
        Some(rect) => rect.width() >= bound_threshold || rect.height() >= bound_threshold,
        None => false,
    }
}

/// GeoJSON text in, filtered + simplified GeoJSON `GeometryCollection` out.
///
/// Accepts any GeoJSON document (`FeatureCollection`, single `Feature`, or
/// bare geometry); features' properties are not carried through — the
/// output is a pure geometry overlay.
///
/// # Errors
///
/// [`GeomError::Json`] if the input is not parseable GeoJSON or contains a
/// geometry GeoJSON can express but `geo-types` cannot.
pub fn simplify_geojson_str(
    text: &str,
    bound_threshold: f64,
    tolerance: f64,
) -> GeomResult<String> {
    let document: GeoJson = text
        .parse()
        .map_err(|e: geojson::Error| GeomError::Json(e.to_string()))?;
    let converted = Geometry::<f64>::try_from(document)
        .map_err(|e| GeomError::Json(e.to_string()))?;

    // Normalize to a flat list: a FeatureCollection converts to a
    // GeometryCollection, a single feature/geometry to itself.
    let members: Vec<Geometry<f64>> = match converted {
        Geometry::GeometryCollection(gc) => gc.0,
        single => vec![single],
    };

    let simplified = filter_and_simplify(&members, bound_threshold, tolerance);
    let collection = Geometry::GeometryCollection(geo_types::GeometryCollection(simplified));
    Ok(GeoJson::Geometry(geojson::Geometry::new(geojson::Value::from(&collection))).to_string())
}

/// Douglas–Peucker per geometry kind.
///
/// Points and multipoints have nothing to thin and pass through unchanged;
/// nested collections recurse.
fn simplify_geometry(geometry: &Geometry<f64>, tolerance: f64) -> Geometry<f64> {
    match geometry {
        Geometry::LineString(g) => Geometry::LineString(g.simplify(&tolerance)),
        Geometry::MultiLineString(g) => Geometry::MultiLineString(g.simplify(&tolerance)),
        Geometry::Polygon(g) => Geometry::Polygon(g.simplify(&tolerance)),
        Geometry::MultiPolygon(g) => Geometry::MultiPolygon(g.simplify(&tolerance)),
        Geometry::GeometryCollection(gc) => Geometry::GeometryCollection(
            geo_types::GeometryCollection(
                gc.0.iter().map(|g| simplify_geometry(g, tolerance)).collect(),
            ),
        ),
        other => other.clone(),
    }
}
