//! Inference provider trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::InferenceError;
use crate::types::ColorDescriptor;

/// Everything the inference service receives about a color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceRequest {
    /// The math-only descriptor computed before augmentation.
    pub descriptor: ColorDescriptor,
    /// Semantic role token, when the caller supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_role: Option<String>,
    /// Human display name, when the caller supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Perceptual-weight hint forwarded so reasoning can reference balance.
    pub weight_hint: f64,
    /// Rendered prompt, filled in by the pipeline's prompt builder.
    /// Providers that drive a raw text model send this verbatim.
    #[serde(default)]
    pub prompt: String,
}

impl InferenceRequest {
    pub fn new(descriptor: ColorDescriptor) -> Self {
        let weight_hint = descriptor.perceptual_weight.score;
        Self {
            descriptor,
            semantic_role: None,
            display_name: None,
            weight_hint,
            prompt: String::new(),
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: Option<String>) -> Self {
        self.semantic_role = role;
        self
    }

    #[must_use]
    pub fn with_display_name(mut self, name: Option<String>) -> Self {
        self.display_name = name;
        self
    }

    #[must_use]
    pub fn with_prompt(mut self, prompt: String) -> Self {
        self.prompt = prompt;
        self
    }
}

/// Semantic reasoning about a color, delivered as free-form model text.
///
/// The provider returns the raw response; extracting the embedded JSON
/// object is the pipeline's responsibility. Timeouts are enforced by the
/// caller, not the provider.
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    /// Run inference for one request.
    ///
    /// # Errors
    /// - `InferenceError::Unavailable` - service unreachable or rejected the
    ///   call
    async fn infer(&self, request: &InferenceRequest) -> Result<String, InferenceError>;
}
