//! Deterministic name generation.
//!
//! Names are produced by table lookup only: a luminosity word from the
//! lightness band, a chroma-intensity word from the chroma band, an optional
//! semantic qualifier when the color sits in an expanded hue hub, and a hue
//! word from the hue band, joined by hyphens. The tables are immutable
//! constants loaded with the process; changing any entry is a versioned
//! product decision, not a runtime concern.

use crate::types::OklchColor;

/// Luminosity words keyed by exclusive upper lightness bound, ascending.
const LUMINOSITY_WORDS: &[(f64, &str)] = &[
    (0.10, "obsidian"),
    (0.22, "charcoal"),
    (0.34, "graphite"),
    (0.46, "ash"),
    (0.58, "silver"),
    (0.74, "bone"),
    (0.86, "ivory"),
    (f64::INFINITY, "snow"),
];

/// Chroma-intensity words keyed by exclusive upper chroma bound, ascending.
/// The lowest band is the achromatic register.
const CHROMA_WORDS: &[(f64, &str)] = &[
    (0.03, "whisper"),
    (0.08, "misted"),
    (0.13, "soft"),
    (0.18, "honest"),
    (0.25, "bold"),
    (0.32, "vivid"),
    (f64::INFINITY, "electric"),
];

/// Hue words over half-open degree bands `[start, end)`. The red band spans
/// the 0° wrap, hence two rows.
const HUE_WORDS: &[(f64, f64, &str)] = &[
    (0.0, 15.0, "red"),
    (15.0, 45.0, "ember"),
    (45.0, 75.0, "gold"),
    (75.0, 105.0, "moss"),
    (105.0, 135.0, "green"),
    (135.0, 165.0, "jade"),
    (165.0, 195.0, "arctic"),
    (195.0, 225.0, "azure"),
    (225.0, 255.0, "cobalt"),
    (255.0, 285.0, "violet"),
    (285.0, 315.0, "orchid"),
    (315.0, 345.0, "rose"),
    (345.0, 360.0, "red"),
];

/// Expanded hue hub: a semantically loaded hue band that earns an extra
/// qualifier word when the color is saturated and mid-lightness.
struct HubRule {
    hue_start: f64,
    hue_end: f64,
    min_chroma: f64,
    min_lightness: f64,
    max_lightness: f64,
    qualifier: &'static str,
}

const HUB_MIN_CHROMA: f64 = 0.18;
const HUB_LIGHTNESS_MIN: f64 = 0.35;
const HUB_LIGHTNESS_MAX: f64 = 0.65;

/// The expanded hubs. Band boundaries match [`HUE_WORDS`]; the red hub spans
/// the wrap like the red band does.
const EXPANDED_HUBS: &[HubRule] = &[
    HubRule {
        hue_start: 0.0,
        hue_end: 15.0,
        min_chroma: HUB_MIN_CHROMA,
        min_lightness: HUB_LIGHTNESS_MIN,
        max_lightness: HUB_LIGHTNESS_MAX,
        qualifier: "warning",
    },
    HubRule {
        hue_start: 345.0,
        hue_end: 360.0,
        min_chroma: HUB_MIN_CHROMA,
        min_lightness: HUB_LIGHTNESS_MIN,
        max_lightness: HUB_LIGHTNESS_MAX,
        qualifier: "warning",
    },
    HubRule {
        hue_start: 45.0,
        hue_end: 75.0,
        min_chroma: HUB_MIN_CHROMA,
        min_lightness: HUB_LIGHTNESS_MIN,
        max_lightness: HUB_LIGHTNESS_MAX,
        qualifier: "caution",
    },
    HubRule {
        hue_start: 105.0,
        hue_end: 135.0,
        min_chroma: HUB_MIN_CHROMA,
        min_lightness: HUB_LIGHTNESS_MIN,
        max_lightness: HUB_LIGHTNESS_MAX,
        qualifier: "growth",
    },
    HubRule {
        hue_start: 195.0,
        hue_end: 225.0,
        min_chroma: HUB_MIN_CHROMA,
        min_lightness: HUB_LIGHTNESS_MIN,
        max_lightness: HUB_LIGHTNESS_MAX,
        qualifier: "trust",
    },
];

fn luminosity_word(l: f64) -> &'static str {
    LUMINOSITY_WORDS
        .iter()
        .find(|(bound, _)| l < *bound)
        .map(|(_, word)| *word)
        .unwrap_or("snow")
}

fn chroma_word(c: f64) -> &'static str {
    CHROMA_WORDS
        .iter()
        .find(|(bound, _)| c < *bound)
        .map(|(_, word)| *word)
        .unwrap_or("electric")
}

fn hue_word(h: f64) -> &'static str {
    HUE_WORDS
        .iter()
        .find(|(start, end, _)| h >= *start && h < *end)
        .map(|(_, _, word)| *word)
        .unwrap_or("red")
}

fn hub_qualifier(color: &OklchColor) -> Option<&'static str> {
    EXPANDED_HUBS
        .iter()
        .find(|rule| {
            color.h() >= rule.hue_start
                && color.h() < rule.hue_end
                && color.c() >= rule.min_chroma
                && color.l() >= rule.min_lightness
                && color.l() <= rule.max_lightness
        })
        .map(|rule| rule.qualifier)
}

/// The deterministic hyphen-joined name for a color.
pub fn name_color(color: &OklchColor) -> String {
    let mut words = vec![luminosity_word(color.l()), chroma_word(color.c())];
    if let Some(qualifier) = hub_qualifier(color) {
        words.push(qualifier);
    }
    words.push(hue_word(color.h()));
    words.join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(l: f64, c: f64, h: f64) -> String {
        name_color(&OklchColor::new(l, c, h).unwrap())
    }

    #[test]
    fn test_three_word_name() {
        assert_eq!(name(0.700, 0.150, 260.0), "bone-honest-violet");
    }

    #[test]
    fn test_expanded_hub_inserts_qualifier() {
        assert_eq!(name(0.500, 0.200, 10.0), "silver-bold-warning-red");
        // same hue band across the wrap
        assert_eq!(name(0.500, 0.200, 350.0), "silver-bold-warning-red");
    }

    #[test]
    fn test_achromatic_band() {
        assert_eq!(name(0.500, 0.020, 180.0), "silver-whisper-arctic");
    }

    #[test]
    fn test_hub_requires_chroma_and_mid_lightness() {
        // chroma below the hub floor: plain three-word name
        assert_eq!(name(0.500, 0.150, 10.0), "silver-honest-red");
        // lightness outside the hub window
        assert_eq!(name(0.800, 0.200, 10.0), "ivory-bold-red");
        assert_eq!(name(0.300, 0.200, 10.0), "graphite-bold-red");
    }

    #[test]
    fn test_other_hubs() {
        assert_eq!(name(0.500, 0.200, 120.0), "silver-bold-growth-green");
        assert_eq!(name(0.500, 0.200, 210.0), "silver-bold-trust-azure");
        assert_eq!(name(0.500, 0.200, 60.0), "silver-bold-caution-gold");
    }

    #[test]
    fn test_band_boundaries_are_half_open() {
        // 0.58 is the first lightness of the bone band
        assert!(name(0.58, 0.150, 260.0).starts_with("bone-"));
        // 0.03 is the first chroma of the misted band
        assert!(name(0.50, 0.03, 260.0).contains("-misted-"));
        // 345 wraps into the red band
        assert!(name(0.50, 0.05, 345.0).ends_with("-red"));
        assert!(name(0.50, 0.05, 344.9).ends_with("-rose"));
    }

    #[test]
    fn test_extreme_coordinates_still_name() {
        assert_eq!(name(0.0, 0.0, 0.0), "obsidian-whisper-red");
        assert_eq!(name(1.0, 0.5, 359.9), "snow-electric-red");
    }
}
