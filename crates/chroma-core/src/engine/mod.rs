//! The pure color computation engine.
//!
//! `describe` maps one validated color to its full descriptor: tonal scale,
//! harmony families, accessibility metrics, categorical analysis, visual
//! weights, semantic role suggestions, and the deterministic name. No I/O,
//! no randomness, no shared state; for a fixed input the output is
//! bit-for-bit reproducible across processes and platforms.

mod analysis;
mod contrast;
mod harmony;
mod naming;
mod scale;
mod suggestions;
mod weight;

pub use analysis::{classify_temperature, is_light};
pub use contrast::{apca_score, contrast_on_black, contrast_on_white};
pub use harmony::harmonies;
pub use naming::name_color;
pub use scale::{tonal_scale, SCALE_LIGHTNESS_STEPS};
pub use suggestions::semantic_suggestions;
pub use weight::{atmospheric_weight, perceptual_weight};

use crate::types::{Accessibility, Analysis, ColorDescriptor, OklchColor};

/// Compute the full (math-only) descriptor for a color.
///
/// The `intelligence` field is always `None` here; it is populated by the
/// retrieval pipeline after augmentation.
pub fn describe(color: &OklchColor) -> ColorDescriptor {
    let accessibility = Accessibility {
        on_white: contrast_on_white(color),
        on_black: contrast_on_black(color),
        apca_on_white: apca_score(color, 1.0),
        apca_on_black: apca_score(color, 0.0),
    };
    let temperature = classify_temperature(color.h());
    let name = name_color(color);

    ColorDescriptor {
        base: *color,
        scale: tonal_scale(color),
        harmonies: harmonies(color),
        analysis: Analysis {
            temperature,
            is_light: is_light(&accessibility),
            name: name.clone(),
        },
        perceptual_weight: perceptual_weight(color),
        atmospheric_weight: atmospheric_weight(color, temperature),
        semantic_suggestions: semantic_suggestions(color),
        accessibility,
        name,
        intelligence: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(l: f64, c: f64, h: f64) -> OklchColor {
        OklchColor::new(l, c, h).unwrap()
    }

    #[test]
    fn test_describe_is_deterministic() {
        let base = color(0.5, 0.2, 10.0);
        let a = describe(&base);
        let b = describe(&base);
        assert_eq!(a, b);
        // byte-identical once serialized
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_describe_has_no_intelligence() {
        assert!(describe(&color(0.5, 0.2, 10.0)).intelligence.is_none());
    }

    #[test]
    fn test_harmony_counts_invariant() {
        for (l, c, h) in [
            (0.0, 0.0, 0.0),
            (1.0, 0.4, 359.9),
            (0.5, 0.12, 240.0),
            (0.95, 0.02, 145.0),
        ] {
            let d = describe(&color(l, c, h));
            assert_eq!(d.harmonies.triadic.len(), 2);
            assert_eq!(d.harmonies.analogous.len(), 2);
            assert_eq!(d.harmonies.tetradic.len(), 3);
            let mono = d.harmonies.monochromatic.len();
            assert!((4..=5).contains(&mono), "monochromatic count {mono}");
        }
    }

    #[test]
    fn test_scale_shape_invariant() {
        for (l, c, h) in [(0.0, 0.0, 0.0), (1.0, 0.37, 145.0), (0.5, 0.12, 240.0)] {
            let d = describe(&color(l, c, h));
            assert_eq!(d.scale.len(), 11);
            for pair in d.scale.windows(2) {
                assert!(pair[0].l() <= pair[1].l(), "scale not ascending");
            }
        }
    }

    #[test]
    fn test_accessibility_booleans_consistent_with_ratios() {
        for (l, c, h) in [(0.1, 0.05, 30.0), (0.5, 0.2, 10.0), (0.95, 0.05, 200.0)] {
            let d = describe(&color(l, c, h));
            for report in [d.accessibility.on_white, d.accessibility.on_black] {
                assert_eq!(report.wcag_aa, report.ratio >= 4.5);
                assert_eq!(report.wcag_aaa, report.ratio >= 7.0);
            }
        }
    }

    #[test]
    fn test_analysis_name_matches_descriptor_name() {
        let d = describe(&color(0.7, 0.15, 260.0));
        assert_eq!(d.analysis.name, d.name);
    }
}
