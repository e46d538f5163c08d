//! The computed descriptor for a single color.
//!
//! Everything here except [`ColorIntelligence`] is produced by the pure
//! engine and is reproducible bit-for-bit for a fixed input color. The
//! intelligence block is only present after augmentation by the external
//! inference service.
//!
//! # Cache metadata tolerance
//!
//! Descriptors round-trip through the vector cache as JSON metadata. Fields
//! added after the first deployed generation (`intelligence`, the weight
//! reports, `semantic_suggestions`) carry `#[serde(default)]` so entries
//! written by older processes still decode; defaulting happens here, at the
//! deserialization boundary, not downstream.

use serde::{Deserialize, Serialize};

use crate::error::{CacheError, ChromaResult};
use crate::types::OklchColor;

/// Placeholder substituted for required inference fields the service omitted.
pub const MISSING_FIELD_PLACEHOLDER: &str = "No reasoning provided";

/// Categorical color temperature, classified from fixed hue buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    Warm,
    Cool,
    Neutral,
}

/// WCAG contrast figures against one background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastReport {
    /// Contrast ratio in [1, 21].
    pub ratio: f64,
    /// `ratio >= 4.5` (AA, normal text).
    pub wcag_aa: bool,
    /// `ratio >= 7.0` (AAA, normal text).
    pub wcag_aaa: bool,
}

/// Contrast metrics against white and black backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Accessibility {
    pub on_white: ContrastReport,
    pub on_black: ContrastReport,
    /// Signed APCA score with the color as text on white; positive polarity.
    pub apca_on_white: f64,
    /// Signed APCA score with the color as text on black; negative polarity.
    pub apca_on_black: f64,
}

/// Categorical analysis of the base color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub temperature: Temperature,
    pub is_light: bool,
    /// Same deterministic name as [`ColorDescriptor::name`].
    pub name: String,
}

/// Harmony families derived from the base color by fixed offsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Harmonies {
    /// Hue +180°.
    pub complementary: OklchColor,
    /// Hue ±120°; always 2 entries.
    pub triadic: Vec<OklchColor>,
    /// Hue ±30°; always 2 entries.
    pub analogous: Vec<OklchColor>,
    /// Hue +90°/+180°/+270°; always 3 entries.
    pub tetradic: Vec<OklchColor>,
    /// Lightness −0.2/−0.1/+0.1/+0.2 clamped to [0,1]; always 4 entries.
    pub monochromatic: Vec<OklchColor>,
}

/// A visual-weight score with its density label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightReport {
    /// Score in [0,1].
    pub score: f64,
    /// Label from the const density table.
    pub label: String,
}

impl Default for WeightReport {
    fn default() -> Self {
        Self {
            score: 0.0,
            label: "unweighted".to_owned(),
        }
    }
}

/// Role → color mappings derived from the base hue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SemanticSuggestions {
    pub danger: Option<OklchColor>,
    pub success: Option<OklchColor>,
    pub warning: Option<OklchColor>,
    pub info: Option<OklchColor>,
}

/// Output of the external inference service, merged into the descriptor on
/// augmentation.
///
/// Field names mirror the service's JSON contract (camelCase). Required
/// fields the service omitted are filled with [`MISSING_FIELD_PLACEHOLDER`]
/// at deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorIntelligence {
    #[serde(default = "missing_field")]
    pub suggested_name: String,
    #[serde(default = "missing_field")]
    pub reasoning: String,
    #[serde(default = "missing_field")]
    pub emotional_impact: String,
    #[serde(default = "missing_field")]
    pub cultural_context: String,
    #[serde(default = "missing_field")]
    pub accessibility_notes: String,
    #[serde(default = "missing_field")]
    pub usage_guidance: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balancing_guidance: Option<String>,
}

fn missing_field() -> String {
    MISSING_FIELD_PLACEHOLDER.to_owned()
}

/// The full computed result for one color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorDescriptor {
    /// The validated base color.
    pub base: OklchColor,
    /// 11 colors, darkest at index 0, lightest at index 10.
    pub scale: Vec<OklchColor>,
    pub harmonies: Harmonies,
    pub accessibility: Accessibility,
    pub analysis: Analysis,
    #[serde(default)]
    pub perceptual_weight: WeightReport,
    #[serde(default)]
    pub atmospheric_weight: WeightReport,
    #[serde(default)]
    pub semantic_suggestions: SemanticSuggestions,
    /// Deterministic multi-word identifier, hyphen-joined.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intelligence: Option<ColorIntelligence>,
}

impl ColorDescriptor {
    /// Serialize into cache metadata.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::Serialization` if the descriptor cannot be
    /// represented as JSON (cannot happen for engine-produced descriptors).
    pub fn to_metadata(&self) -> ChromaResult<serde_json::Value> {
        serde_json::to_value(self)
            .map_err(|e| CacheError::Serialization(e.to_string()).into())
    }

    /// Reconstruct a descriptor from cache metadata.
    ///
    /// Tolerates metadata written by older processes: optional fields that
    /// are absent take their documented defaults instead of failing the read.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::Serialization` if the required fields are absent
    /// or malformed.
    pub fn from_metadata(metadata: serde_json::Value) -> ChromaResult<Self> {
        serde_json::from_value(metadata)
            .map_err(|e| CacheError::Serialization(e.to_string()).into())
    }
}
