//! WCAG and APCA contrast metrics.
//!
//! Both algorithms run on the relative luminance of the gamut-fitted color:
//! out-of-gamut inputs are fitted first so the reported figures describe the
//! color as it would actually render.

use crate::types::{ContrastReport, OklchColor};

/// WCAG AA threshold for normal text.
pub const WCAG_AA_RATIO: f64 = 4.5;
/// WCAG AAA threshold for normal text.
pub const WCAG_AAA_RATIO: f64 = 7.0;

// Simplified APCA constant set (0.0.98G-family exponents).
const APCA_EXP_TEXT: f64 = 0.57;
const APCA_EXP_BACKGROUND: f64 = 0.56;
const APCA_REVERSE_SCALE: f64 = 1.14;
const APCA_BLACK_CLAMP: f64 = 0.027;
const APCA_BLACK_CLAMP_EXP: f64 = 1.14;
const APCA_OUTPUT_SCALE: f64 = 108.0;

/// WCAG relative luminance of a color, in [0,1].
pub fn relative_luminance(color: &OklchColor) -> f64 {
    let (r, g, b) = color.gamut_fit().to_linear_srgb();
    let clamp = |v: f64| v.clamp(0.0, 1.0);
    0.2126 * clamp(r) + 0.7152 * clamp(g) + 0.0722 * clamp(b)
}

/// WCAG contrast ratio between two luminances, in [1,21].
fn contrast_ratio(lum_a: f64, lum_b: f64) -> f64 {
    let (hi, lo) = if lum_a >= lum_b {
        (lum_a, lum_b)
    } else {
        (lum_b, lum_a)
    };
    (hi + 0.05) / (lo + 0.05)
}

fn report_against(color: &OklchColor, background_luminance: f64) -> ContrastReport {
    let ratio = contrast_ratio(relative_luminance(color), background_luminance);
    ContrastReport {
        ratio,
        wcag_aa: ratio >= WCAG_AA_RATIO,
        wcag_aaa: ratio >= WCAG_AAA_RATIO,
    }
}

/// Contrast figures for the color against a white background.
pub fn contrast_on_white(color: &OklchColor) -> ContrastReport {
    report_against(color, 1.0)
}

/// Contrast figures for the color against a black background.
pub fn contrast_on_black(color: &OklchColor) -> ContrastReport {
    report_against(color, 0.0)
}

/// Signed APCA lightness-contrast score for `color` as text over a
/// background of the given relative luminance.
///
/// Positive for dark text on a lighter background, negative for light text
/// on a darker background; magnitude grows with contrast (≈ 0..106). Uses
/// the simplified constant set (same exponents both polarities), adequate
/// for layout heuristics.
pub fn apca_score(color: &OklchColor, background_luminance: f64) -> f64 {
    let text_y = soft_clamp(relative_luminance(color));
    let background_y = soft_clamp(background_luminance);

    if background_y >= text_y {
        // Dark text on light background: positive polarity.
        (background_y.powf(APCA_EXP_BACKGROUND) - text_y.powf(APCA_EXP_TEXT))
            * APCA_OUTPUT_SCALE
            * APCA_REVERSE_SCALE
    } else {
        // Light text on dark background: negative polarity.
        -(text_y.powf(APCA_EXP_TEXT) - background_y.powf(APCA_EXP_BACKGROUND)) * APCA_OUTPUT_SCALE
    }
}

/// APCA black-level soft clamp: lifts very dark luminances instead of
/// letting the power curve blow up near zero.
fn soft_clamp(y: f64) -> f64 {
    if y >= APCA_BLACK_CLAMP {
        y
    } else {
        y + (APCA_BLACK_CLAMP - y).powf(APCA_BLACK_CLAMP_EXP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(l: f64, c: f64, h: f64) -> OklchColor {
        OklchColor::new(l, c, h).unwrap()
    }

    #[test]
    fn test_luminance_extremes() {
        assert!(relative_luminance(&color(0.0, 0.0, 0.0)) < 1e-6);
        assert!((relative_luminance(&color(1.0, 0.0, 0.0)) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_black_and_white_ratios() {
        let black = color(0.0, 0.0, 0.0);
        assert!((contrast_on_white(&black).ratio - 21.0).abs() < 1e-2);
        assert!((contrast_on_black(&black).ratio - 1.0).abs() < 1e-3);
        assert!(contrast_on_white(&black).wcag_aaa);
        assert!(!contrast_on_black(&black).wcag_aa);
    }

    #[test]
    fn test_booleans_follow_thresholds() {
        for l in [0.1, 0.3, 0.5, 0.7, 0.9] {
            let c = color(l, 0.1, 145.0);
            for report in [contrast_on_white(&c), contrast_on_black(&c)] {
                assert_eq!(report.wcag_aa, report.ratio >= WCAG_AA_RATIO);
                assert_eq!(report.wcag_aaa, report.ratio >= WCAG_AAA_RATIO);
            }
        }
    }

    #[test]
    fn test_apca_polarity() {
        let dark = color(0.2, 0.05, 260.0);
        let light = color(0.9, 0.05, 260.0);
        // dark text on white: strongly positive
        assert!(apca_score(&dark, 1.0) > 60.0);
        // light text on black: strongly negative
        assert!(apca_score(&light, 0.0) < -60.0);
        // low contrast in both directions stays small
        assert!(apca_score(&light, 1.0).abs() < 40.0);
        assert!(apca_score(&dark, 0.0).abs() < 40.0);
    }

    #[test]
    fn test_apca_is_signed_and_unbounded_by_ratio_scale() {
        let black = color(0.0, 0.0, 0.0);
        let score = apca_score(&black, 1.0);
        assert!(score > 100.0 && score < 130.0);
    }
}
