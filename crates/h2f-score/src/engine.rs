//! Scoring model: normalized throughput/emission scores and the map color.
//!
//! # Normalization
//!
//! Raw throughput baselines span 3–4 orders of magnitude (air moves
//! ~100 000 tonne·km/hr, urban roads ~180), so linear normalization would
//! pin every non-air network at the bottom of the color ramp.  Throughput
//! is therefore `log2`-compressed before scaling, with the ceiling at
//! `log2(1 000 000)`.
//!
//! Emission intensity is normalized linearly against a fixed ceiling of
//! 100 gCO2/tonne·km and inverted, so *lower* emissions score higher.
//! Baselines above the ceiling saturate: the air baseline (602) stays
//! clamped at score 0 until hydrogen uptake pushes the adjusted value
//! under 100, around 83 % uptake.

use h2f_core::{NetworkAssumptions, NetworkType, Rgb};

use crate::ScoreError;

// ── Normalization ceilings ────────────────────────────────────────────────────

/// Throughput (tonne·km/hr) whose `log2` is the top of the throughput scale.
pub const THROUGHPUT_CEILING_TONNE_KM_HR: f64 = 1_000_000.0;

/// Adjusted emission intensity (gCO2/tonne·km) at or above which the
/// emission score floors at 0.
pub const EMISSION_CEILING_GCO2_TONNE_KM: f64 = 100.0;

// ── Input / output value objects ──────────────────────────────────────────────

/// One scoring request, built fresh on every slider change.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ScoreInput {
    pub network: NetworkType,
    /// Share of the fleet running on hydrogen, 0–100.
    pub hydrogen_uptake_percent: u8,
    /// Global multiplier on emission baselines (scenario knob, default 1).
    pub gco2_scaling_factor: f64,
    /// Global multiplier on throughput baselines (scenario knob, default 1).
    pub tonne_scaling_factor: f64,
}

impl ScoreInput {
    /// An input with both scaling factors at their neutral value of 1.
    pub fn new(network: NetworkType, hydrogen_uptake_percent: u8) -> Self {
        Self {
            network,
            hydrogen_uptake_percent,
            gco2_scaling_factor: 1.0,
            tonne_scaling_factor: 1.0,
        }
    }
}

/// The derived metrics for one network under one [`ScoreInput`].
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ScoreResult {
    /// Normalized log-compressed throughput, in `[0,1]`.
    pub throughput_score: f64,
    /// Normalized inverted emission intensity, in `[0,1]`.
    pub emission_score: f64,
    /// Arithmetic mean of the component scores, in `[0,1]`.
    pub combined_score: f64,
    /// The combined score on the red→green ramp.
    pub color: Rgb,
}

// ── Free functions ────────────────────────────────────────────────────────────

/// Combine per-metric scores into one health score (arithmetic mean).
///
/// Takes a slice so additional metrics can join without changing call sites.
///
/// # Errors
///
/// [`ScoreError::EmptyInput`] if `scores` is empty.
pub fn combine_scores(scores: &[f64]) -> Result<f64, ScoreError> {
    if scores.is_empty() {
        return Err(ScoreError::EmptyInput);
    }
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    Ok(mean.clamp(0.0, 1.0))
}

/// Map a `[0,1]` score onto the red→green ramp.
///
/// `red = round((1 − s)·255)`, `green = round(s·255)`, `blue = 0`, using
/// `f64::round` (half away from zero), so a score of 0.5 yields
/// `(128, 128, 0)`.  The input is clamped into `[0,1]` first; the mapping
/// is exact and reproducible for a given score.
pub fn score_to_color(score: f64) -> Rgb {
    let s = if score.is_nan() { 0.0 } else { score.clamp(0.0, 1.0) };
    Rgb::new(
        ((1.0 - s) * 255.0).round() as u8,
        (s * 255.0).round() as u8,
        0,
    )
}

// ── ScoreEngine ───────────────────────────────────────────────────────────────

/// The scoring engine: pure functions over a borrowed assumptions table.
///
/// Construct one per process (or per scenario table) and share it freely;
/// it holds no mutable state.
#[derive(Copy, Clone, Debug)]
pub struct ScoreEngine<'a> {
    assumptions: &'a NetworkAssumptions,
}

impl<'a> ScoreEngine<'a> {
    pub fn new(assumptions: &'a NetworkAssumptions) -> Self {
        Self { assumptions }
    }

    /// Normalized throughput score for `network` in `[0,1]`.
    ///
    /// A factor of 0 always yields exactly 0.
    ///
    /// # Errors
    ///
    /// [`ScoreError::InvalidFactor`] if the factor is negative or non-finite.
    pub fn throughput_score(
        &self,
        network: NetworkType,
        tonne_scaling_factor: f64,
    ) -> Result<f64, ScoreError> {
        check_factor("tonne scaling factor", tonne_scaling_factor)?;

        let upper = THROUGHPUT_CEILING_TONNE_KM_HR.log2();
        let compressed = self.assumptions.throughput_baseline(network).log2();
        let scaled = (compressed * tonne_scaling_factor).clamp(0.0, upper);
        Ok(scaled / upper)
    }

    /// Normalized emission score for `network` in `[0,1]`.
    ///
    /// 1 means zero emissions; 0 means the adjusted intensity is at or above
    /// [`EMISSION_CEILING_GCO2_TONNE_KM`].  Monotonically non-decreasing in
    /// `hydrogen_uptake_percent`.
    ///
    /// # Errors
    ///
    /// [`ScoreError::UptakeOutOfRange`] if the percentage exceeds 100,
    /// [`ScoreError::InvalidFactor`] if the factor is negative or non-finite.
    pub fn emission_score(
        &self,
        network: NetworkType,
        hydrogen_uptake_percent: u8,
        gco2_scaling_factor: f64,
    ) -> Result<f64, ScoreError> {
        check_factor("gCO2 scaling factor", gco2_scaling_factor)?;
        if hydrogen_uptake_percent > 100 {
            return Err(ScoreError::UptakeOutOfRange(hydrogen_uptake_percent));
        }

        let fossil_fraction = f64::from(100 - hydrogen_uptake_percent) / 100.0;
        let adjusted =
            self.assumptions.emission_baseline(network) * gco2_scaling_factor * fossil_fraction;
        let clamped = adjusted.clamp(0.0, EMISSION_CEILING_GCO2_TONNE_KM);
        Ok(1.0 - clamped / EMISSION_CEILING_GCO2_TONNE_KM)
    }

    /// Full derived metrics for one input.
    pub fn score(&self, input: ScoreInput) -> Result<ScoreResult, ScoreError> {
        let throughput_score =
            self.throughput_score(input.network, input.tonne_scaling_factor)?;
        let emission_score = self.emission_score(
            input.network,
            input.hydrogen_uptake_percent,
            input.gco2_scaling_factor,
        )?;
        let combined_score = combine_scores(&[throughput_score, emission_score])?;

        Ok(ScoreResult {
            throughput_score,
            emission_score,
            combined_score,
            color: score_to_color(combined_score),
        })
    }

    /// The per-redraw entry point: one color per network layer.
    pub fn network_color(&self, input: ScoreInput) -> Result<Rgb, ScoreError> {
        Ok(self.score(input)?.color)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn check_factor(name: &'static str, value: f64) -> Result<(), ScoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ScoreError::InvalidFactor { name, value });
    }
    Ok(())
}
