//! Geometry-subsystem error type.

use thiserror::Error;

/// Errors produced by `h2f-geom`.
#[derive(Debug, Error)]
pub enum GeomError {
    /// A line claimed to contain a `LINESTRING` but its coordinate list did
    /// not parse.  Lines with no `LINESTRING` pattern at all are skipped by
    /// the batch converter, not errored.
    #[error("malformed geometry: {0}")]
    MalformedGeometry(String),

    #[error("invalid GeoJSON: {0}")]
    Json(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GeomResult<T> = Result<T, GeomError>;
