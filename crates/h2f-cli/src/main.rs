//! `h2f-geom` — offline map-layer preparation.
//!
//! Converts raw freight-route dumps (CSV rows with a WKT `LINESTRING`
//! column) into GeoJSON, and filters/simplifies GeoJSON for browser-side
//! rendering.  Both subcommands write to stdout; redirect into the
//! dashboard's data directory:
//!
//! ```text
//! h2f-geom convert geometries_2020.csv > routes.geojson
//! h2f-geom simplify routes.geojson > routes_simplified.geojson
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use h2f_geom::{
    DEFAULT_BOUND_THRESHOLD, DEFAULT_SIMPLIFY_TOLERANCE, simplify_geojson_str,
    to_feature_collection,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct GeomArguments {
    #[command(subcommand)]
    command: GeomCommand,
}

#[derive(Subcommand)]
enum GeomCommand {
    /// Convert WKT LINESTRING lines to a GeoJSON FeatureCollection.
    Convert {
        /// Input file (raw text lines, or CSV with --column).
        filename: PathBuf,
        /// Read the file as CSV and take WKT values from this column.
        #[arg(long)]
        column: Option<String>,
    },
    /// Filter small geometries out of a GeoJSON file and simplify the rest.
    Simplify {
        /// Input GeoJSON file.
        filename: PathBuf,
        /// Minimum bounding-box extent (degrees) to keep a geometry.
        #[arg(long, default_value_t = DEFAULT_BOUND_THRESHOLD)]
        bound_threshold: f64,
        /// Douglas-Peucker tolerance (degrees).
        #[arg(long, default_value_t = DEFAULT_SIMPLIFY_TOLERANCE)]
        tolerance: f64,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let args = GeomArguments::parse();

    match args.command {
        GeomCommand::Convert { filename, column } => {
            let lines = match column {
                None => read_lines(&filename)?,
                Some(name) => read_csv_column(&filename, &name)?,
            };

            let (collection, failures) = to_feature_collection(&lines);
            for failure in &failures {
                log::warn!("{failure}");
            }
            log::info!(
                "converted {} features ({} malformed lines skipped)",
                collection.features.len(),
                failures.len()
            );
            println!("{collection}");
        }
        GeomCommand::Simplify { filename, bound_threshold, tolerance } => {
            let text = std::fs::read_to_string(&filename)
                .with_context(|| format!("reading {}", filename.display()))?;
            let simplified = simplify_geojson_str(&text, bound_threshold, tolerance)?;
            println!("{simplified}");
        }
    }
    Ok(())
}

fn read_lines(filename: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(filename)
        .with_context(|| format!("reading {}", filename.display()))?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Pull one column out of a CSV file, by header name.
fn read_csv_column(filename: &Path, column: &str) -> Result<Vec<String>> {
    let file = File::open(filename)
        .with_context(|| format!("opening {}", filename.display()))?;
    let mut reader = csv::Reader::from_reader(file);

    let index = reader
        .headers()
        .context("reading CSV header")?
        .iter()
        .position(|h| h == column)
        .with_context(|| format!("CSV has no column named {column:?}"))?;

    let mut values = Vec::new();
    for record in reader.records() {
        let record = record.context("reading CSV record")?;
        if let Some(value) = record.get(index) {
            values.push(value.to_string());
        }
    }
    Ok(values)
}
