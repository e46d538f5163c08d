//! Visual weight scores for layout balancing.
//!
//! Perceptual weight measures how heavy a color reads on its own (darker and
//! more chromatic is heavier). Atmospheric weight adjusts for temperature:
//! warm hues advance, cool hues recede. Both scores live in [0,1] with a
//! label from a const density table.

use crate::types::{OklchColor, Temperature, WeightReport};

/// Chroma considered fully saturated for weighting purposes.
const CHROMA_CEILING: f64 = 0.37;

const LIGHTNESS_FACTOR: f64 = 0.7;
const CHROMA_FACTOR: f64 = 0.3;

/// Temperature adjustment applied to the atmospheric score.
const TEMPERATURE_SHIFT: f64 = 0.08;

/// Perceptual density labels keyed by exclusive upper score bound.
const PERCEPTUAL_LABELS: &[(f64, &str)] = &[
    (0.25, "feather"),
    (0.45, "light"),
    (0.65, "medium"),
    (0.85, "heavy"),
    (f64::INFINITY, "anchor"),
];

/// Atmospheric presence labels keyed by exclusive upper score bound.
const ATMOSPHERIC_LABELS: &[(f64, &str)] = &[
    (0.33, "airy"),
    (0.66, "balanced"),
    (f64::INFINITY, "enveloping"),
];

fn label_for(score: f64, table: &[(f64, &str)]) -> String {
    table
        .iter()
        .find(|(bound, _)| score < *bound)
        .map(|(_, label)| (*label).to_owned())
        .unwrap_or_else(|| "anchor".to_owned())
}

fn perceptual_score(color: &OklchColor) -> f64 {
    let chroma_part = (color.c() / CHROMA_CEILING).min(1.0);
    LIGHTNESS_FACTOR * (1.0 - color.l()) + CHROMA_FACTOR * chroma_part
}

/// Standalone visual weight of a color.
pub fn perceptual_weight(color: &OklchColor) -> WeightReport {
    let score = perceptual_score(color);
    WeightReport {
        score,
        label: label_for(score, PERCEPTUAL_LABELS),
    }
}

/// Temperature-adjusted weight: warm advances, cool recedes.
pub fn atmospheric_weight(color: &OklchColor, temperature: Temperature) -> WeightReport {
    let shift = match temperature {
        Temperature::Warm => TEMPERATURE_SHIFT,
        Temperature::Cool => -TEMPERATURE_SHIFT,
        Temperature::Neutral => 0.0,
    };
    let score = (perceptual_score(color) + shift).clamp(0.0, 1.0);
    WeightReport {
        score,
        label: label_for(score, ATMOSPHERIC_LABELS),
    }
}
