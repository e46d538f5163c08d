//! Tonal scale generation.

use crate::types::OklchColor;

/// Fixed lightness steps for the 11-position scale, darkest first.
///
/// Position 0 is the darkest, position 10 the lightest. The step values are
/// part of the cache contract: changing them invalidates every stored
/// descriptor.
pub const SCALE_LIGHTNESS_STEPS: [f64; 11] = [
    0.15, 0.23, 0.31, 0.39, 0.47, 0.55, 0.63, 0.71, 0.79, 0.87, 0.95,
];

/// Generate the 11-color tonal scale for a base color.
///
/// Chroma and hue are held from the base; each step is gamut-fitted by
/// chroma reduction only, so index order is exactly lightness order.
pub fn tonal_scale(base: &OklchColor) -> Vec<OklchColor> {
    SCALE_LIGHTNESS_STEPS
        .iter()
        .map(|&l| base.with_lightness(l).gamut_fit())
        .collect()
}
