//! The `OklchColor` value type.
//!
//! A color in OKLCH space: lightness `l ∈ [0,1]`, chroma `c ∈ [0,∞)`, hue
//! `h ∈ [0,360)` degrees, optional alpha `∈ [0,1]`. Immutable, equality by
//! value.
//!
//! Construction is fail-fast: out-of-range or non-finite components are
//! rejected with [`ChromaError::Validation`] before any I/O happens. The
//! clamping/wrapping helpers (`with_lightness`, `shifted_hue`) exist only for
//! *derived* colors produced by the engine; caller input is never silently
//! clamped. Deserialization routes through the same validation.

use palette::{IntoColor, LinSrgb, OklabHue, Oklch, Srgb};
use serde::{Deserialize, Serialize};

use crate::error::{ChromaError, ChromaResult};

/// Tolerance for sRGB component bounds when testing gamut containment.
/// Conversion round-trips land slightly outside [0,1] for boundary colors.
const GAMUT_EPSILON: f64 = 1e-4;

/// Iterations of the chroma-reducing binary search in [`gamut_fit`].
/// 16 halvings resolve chroma to ~6e-6, well below visible differences.
const GAMUT_FIT_ITERATIONS: u32 = 16;

/// A color in OKLCH space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawOklch")]
pub struct OklchColor {
    l: f64,
    c: f64,
    h: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    alpha: Option<f64>,
}

/// Unvalidated wire shape; the only path into [`OklchColor`] from serde.
#[derive(Debug, Deserialize)]
struct RawOklch {
    l: f64,
    c: f64,
    h: f64,
    #[serde(default)]
    alpha: Option<f64>,
}

impl TryFrom<RawOklch> for OklchColor {
    type Error = ChromaError;

    fn try_from(raw: RawOklch) -> ChromaResult<Self> {
        let color = OklchColor::new(raw.l, raw.c, raw.h)?;
        match raw.alpha {
            Some(a) => color.with_alpha(a),
            None => Ok(color),
        }
    }
}

impl OklchColor {
    /// Create a validated color.
    ///
    /// # Errors
    ///
    /// Returns `ChromaError::Validation` if `l ∉ [0,1]`, `c < 0`,
    /// `h ∉ [0,360)`, or any component is non-finite.
    pub fn new(l: f64, c: f64, h: f64) -> ChromaResult<Self> {
        if !l.is_finite() || !(0.0..=1.0).contains(&l) {
            return Err(ChromaError::validation(format!(
                "lightness {l} outside [0,1]"
            )));
        }
        if !c.is_finite() || c < 0.0 {
            return Err(ChromaError::validation(format!(
                "chroma {c} must be finite and non-negative"
            )));
        }
        if !h.is_finite() || !(0.0..360.0).contains(&h) {
            return Err(ChromaError::validation(format!("hue {h} outside [0,360)")));
        }
        Ok(Self {
            l,
            c,
            h,
            alpha: None,
        })
    }

    /// Attach an alpha channel.
    ///
    /// # Errors
    ///
    /// Returns `ChromaError::Validation` if `alpha ∉ [0,1]` or non-finite.
    pub fn with_alpha(mut self, alpha: f64) -> ChromaResult<Self> {
        if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
            return Err(ChromaError::validation(format!(
                "alpha {alpha} outside [0,1]"
            )));
        }
        self.alpha = Some(alpha);
        Ok(self)
    }

    /// Lightness in [0,1].
    #[inline]
    pub fn l(&self) -> f64 {
        self.l
    }

    /// Chroma, non-negative.
    #[inline]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Hue in [0,360) degrees.
    #[inline]
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Alpha in [0,1], if present.
    #[inline]
    pub fn alpha(&self) -> Option<f64> {
        self.alpha
    }

    // ==================== Derived-color helpers ====================
    // These clamp/wrap instead of failing: they are reserved for colors the
    // engine derives from an already-validated base (scale steps, harmonies,
    // suggestions), where clamping to the valid range is the contract.

    /// Derived color with lightness clamped into [0,1].
    #[must_use]
    pub fn with_lightness(&self, l: f64) -> Self {
        Self {
            l: l.clamp(0.0, 1.0),
            ..*self
        }
    }

    /// Derived color with chroma clamped to non-negative.
    #[must_use]
    pub fn with_chroma(&self, c: f64) -> Self {
        Self {
            c: c.max(0.0),
            ..*self
        }
    }

    /// Derived color with hue replaced (wrapped into [0,360)).
    #[must_use]
    pub fn with_hue(&self, h: f64) -> Self {
        Self {
            h: wrap_hue(h),
            ..*self
        }
    }

    /// Derived color with hue rotated by `degrees` (wraps modulo 360).
    #[must_use]
    pub fn shifted_hue(&self, degrees: f64) -> Self {
        self.with_hue(self.h + degrees)
    }

    // ==================== sRGB conversion ====================

    /// Convert to (non-linear) sRGB components. May fall outside [0,1] for
    /// out-of-gamut colors; see [`is_in_gamut`](Self::is_in_gamut).
    pub fn to_srgb(&self) -> (f64, f64, f64) {
        let oklch: Oklch<f64> = Oklch::new(self.l, self.c, OklabHue::from_degrees(self.h));
        let srgb: Srgb<f64> = oklch.into_color();
        (srgb.red, srgb.green, srgb.blue)
    }

    /// Convert to linear sRGB components (for luminance math).
    pub fn to_linear_srgb(&self) -> (f64, f64, f64) {
        let oklch: Oklch<f64> = Oklch::new(self.l, self.c, OklabHue::from_degrees(self.h));
        let srgb: Srgb<f64> = oklch.into_color();
        let linear: LinSrgb<f64> = srgb.into_linear();
        (linear.red, linear.green, linear.blue)
    }

    /// Whether the color converts to sRGB without clipping.
    pub fn is_in_gamut(&self) -> bool {
        let (r, g, b) = self.to_srgb();
        let in_range = |v: f64| (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(&v);
        in_range(r) && in_range(g) && in_range(b)
    }

    /// Largest-chroma in-gamut variant of this color.
    ///
    /// Holds lightness and hue fixed and reduces chroma via binary search
    /// until the color converts to sRGB without clipping. Deterministic:
    /// fixed iteration count, no data-dependent termination.
    #[must_use]
    pub fn gamut_fit(&self) -> Self {
        if self.is_in_gamut() {
            return *self;
        }
        let mut lo = 0.0_f64;
        let mut hi = self.c;
        for _ in 0..GAMUT_FIT_ITERATIONS {
            let mid = (lo + hi) / 2.0;
            if self.with_chroma(mid).is_in_gamut() {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        self.with_chroma(lo)
    }

    /// Render as a `#rrggbb` hex string (gamut-fitted, alpha ignored).
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.gamut_fit().to_srgb();
        let quantize = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", quantize(r), quantize(g), quantize(b))
    }
}

/// Wrap a hue angle into [0,360).
#[inline]
pub fn wrap_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_valid_ranges() {
        assert!(OklchColor::new(0.0, 0.0, 0.0).is_ok());
        assert!(OklchColor::new(1.0, 0.4, 359.999).is_ok());
        assert!(OklchColor::new(0.5, 0.12, 240.0).is_ok());
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(OklchColor::new(-0.01, 0.1, 180.0).is_err());
        assert!(OklchColor::new(1.01, 0.1, 180.0).is_err());
        assert!(OklchColor::new(0.5, -0.001, 180.0).is_err());
        // hue domain is half-open: 360 itself is invalid
        assert!(OklchColor::new(0.5, 0.1, 360.0).is_err());
        assert!(OklchColor::new(0.5, 0.1, -1.0).is_err());
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert!(OklchColor::new(f64::NAN, 0.1, 180.0).is_err());
        assert!(OklchColor::new(0.5, f64::INFINITY, 180.0).is_err());
        assert!(OklchColor::new(0.5, 0.1, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_alpha_validation() {
        let base = OklchColor::new(0.5, 0.1, 180.0).unwrap();
        assert!(base.with_alpha(0.0).is_ok());
        assert!(base.with_alpha(1.0).is_ok());
        assert!(base.with_alpha(1.5).is_err());
        assert!(base.with_alpha(f64::NAN).is_err());
    }

    #[test]
    fn test_value_equality() {
        let a = OklchColor::new(0.5, 0.12, 240.0).unwrap();
        let b = OklchColor::new(0.5, 0.12, 240.0).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, a.with_lightness(0.6));
    }

    #[test]
    fn test_hue_wrapping() {
        let base = OklchColor::new(0.5, 0.1, 350.0).unwrap();
        assert_eq!(base.shifted_hue(20.0).h(), 10.0);
        assert_eq!(base.shifted_hue(-360.0).h(), 350.0);
        assert_eq!(wrap_hue(720.5), 0.5);
        assert_eq!(wrap_hue(-30.0), 330.0);
    }

    #[test]
    fn test_derived_clamping() {
        let base = OklchColor::new(0.95, 0.1, 60.0).unwrap();
        assert_eq!(base.with_lightness(1.3).l(), 1.0);
        assert_eq!(base.with_lightness(-0.2).l(), 0.0);
        assert_eq!(base.with_chroma(-0.5).c(), 0.0);
    }

    #[test]
    fn test_gamut_fit_reduces_chroma_only() {
        // Very high chroma at high lightness cannot be displayed
        let loud = OklchColor::new(0.95, 0.37, 145.0).unwrap();
        let fitted = loud.gamut_fit();
        assert!(fitted.is_in_gamut());
        assert!(fitted.c() <= loud.c());
        assert_eq!(fitted.l(), loud.l());
        assert_eq!(fitted.h(), loud.h());

        // Achromatic colors are always displayable
        let gray = OklchColor::new(0.5, 0.0, 0.0).unwrap();
        assert_eq!(gray.gamut_fit(), gray);
    }

    #[test]
    fn test_hex_extremes() {
        let black = OklchColor::new(0.0, 0.0, 0.0).unwrap();
        let white = OklchColor::new(1.0, 0.0, 0.0).unwrap();
        assert_eq!(black.to_hex(), "#000000");
        assert_eq!(white.to_hex(), "#ffffff");
    }

    #[test]
    fn test_deserialization_validates() {
        let ok: Result<OklchColor, _> = serde_json::from_str(r#"{"l":0.5,"c":0.12,"h":240.0}"#);
        assert!(ok.is_ok());

        let bad: Result<OklchColor, _> = serde_json::from_str(r#"{"l":1.5,"c":0.12,"h":240.0}"#);
        assert!(bad.is_err());

        let bad_alpha: Result<OklchColor, _> =
            serde_json::from_str(r#"{"l":0.5,"c":0.12,"h":240.0,"alpha":2.0}"#);
        assert!(bad_alpha.is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let color = OklchColor::new(0.5, 0.12, 240.0)
            .unwrap()
            .with_alpha(0.8)
            .unwrap();
        let json = serde_json::to_string(&color).unwrap();
        let back: OklchColor = serde_json::from_str(&json).unwrap();
        assert_eq!(color, back);
    }
}
