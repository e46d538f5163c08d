//! Harmony families derived from a base color by fixed offsets.
//!
//! All hue arithmetic wraps modulo 360; monochromatic lightness steps clamp
//! to [0,1]. Offsets are constants, never data-dependent.

use crate::types::{Harmonies, OklchColor};

/// Hue offsets, degrees.
const TRIADIC_OFFSETS: [f64; 2] = [120.0, 240.0];
const ANALOGOUS_OFFSETS: [f64; 2] = [-30.0, 30.0];
const TETRADIC_OFFSETS: [f64; 3] = [90.0, 180.0, 270.0];

/// Lightness offsets for the monochromatic family.
const MONOCHROMATIC_OFFSETS: [f64; 4] = [-0.2, -0.1, 0.1, 0.2];

/// The complementary color: hue +180°.
pub fn complementary(base: &OklchColor) -> OklchColor {
    base.shifted_hue(180.0)
}

/// All harmony families for a base color.
pub fn harmonies(base: &OklchColor) -> Harmonies {
    Harmonies {
        complementary: complementary(base),
        triadic: TRIADIC_OFFSETS
            .iter()
            .map(|&d| base.shifted_hue(d))
            .collect(),
        analogous: ANALOGOUS_OFFSETS
            .iter()
            .map(|&d| base.shifted_hue(d))
            .collect(),
        tetradic: TETRADIC_OFFSETS
            .iter()
            .map(|&d| base.shifted_hue(d))
            .collect(),
        monochromatic: MONOCHROMATIC_OFFSETS
            .iter()
            .map(|&d| base.with_lightness(base.l() + d))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(l: f64, c: f64, h: f64) -> OklchColor {
        OklchColor::new(l, c, h).unwrap()
    }

    #[test]
    fn test_complementary_wraps() {
        assert_eq!(complementary(&color(0.5, 0.1, 200.0)).h(), 20.0);
        assert_eq!(complementary(&color(0.5, 0.1, 20.0)).h(), 200.0);
    }

    #[test]
    fn test_fixed_offsets_preserve_lightness_and_chroma() {
        let base = color(0.62, 0.17, 310.0);
        let h = harmonies(&base);
        for derived in h
            .triadic
            .iter()
            .chain(h.analogous.iter())
            .chain(h.tetradic.iter())
        {
            assert_eq!(derived.l(), base.l());
            assert_eq!(derived.c(), base.c());
        }
        assert_eq!(h.triadic[0].h(), 70.0);
        assert_eq!(h.triadic[1].h(), 190.0);
        assert_eq!(h.analogous[0].h(), 280.0);
        assert_eq!(h.analogous[1].h(), 340.0);
        assert_eq!(h.tetradic.iter().map(OklchColor::h).collect::<Vec<_>>(), vec![40.0, 130.0, 220.0]);
    }

    #[test]
    fn test_monochromatic_clamps_at_extremes() {
        let near_white = color(0.95, 0.05, 60.0);
        let mono = harmonies(&near_white).monochromatic;
        assert_eq!(mono.len(), 4);
        assert!((mono[0].l() - 0.75).abs() < 1e-12);
        assert!((mono[1].l() - 0.85).abs() < 1e-12);
        // +0.1 and +0.2 both clamp to the lightness ceiling
        assert_eq!(mono[2].l(), 1.0);
        assert_eq!(mono[3].l(), 1.0);
        for derived in &mono {
            assert_eq!(derived.h(), near_white.h());
            assert_eq!(derived.c(), near_white.c());
        }
    }
}
