//! Semantic role suggestions.
//!
//! Each role owns a canonical OKLCH hue; the suggestion rotates the base
//! color to that hue while preserving its lightness, chroma, and alpha, so
//! the suggested color stays in the palette's perceptual family.

use crate::types::{OklchColor, SemanticSuggestions};

/// Canonical role hues, degrees.
const DANGER_HUE: f64 = 25.0;
const SUCCESS_HUE: f64 = 145.0;
const WARNING_HUE: f64 = 95.0;
const INFO_HUE: f64 = 245.0;

/// Role → color mappings for a base color.
pub fn semantic_suggestions(base: &OklchColor) -> SemanticSuggestions {
    SemanticSuggestions {
        danger: Some(base.with_hue(DANGER_HUE)),
        success: Some(base.with_hue(SUCCESS_HUE)),
        warning: Some(base.with_hue(WARNING_HUE)),
        info: Some(base.with_hue(INFO_HUE)),
    }
}
