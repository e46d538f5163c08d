//! Prompt templates for the color inference service.
//!
//! The service is expected to answer with free-form text containing one JSON
//! object; the system prompt pins the object's schema. Extraction of that
//! object is handled by [`crate::extract`].

use chroma_core::traits::InferenceRequest;

/// Builder for color reasoning prompts.
#[derive(Debug, Clone)]
pub struct ColorPromptBuilder {
    /// System prompt for the service.
    system_prompt: String,

    /// Maximum display-name length forwarded verbatim (characters).
    max_display_name_length: usize,
}

impl Default for ColorPromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorPromptBuilder {
    /// Create a new prompt builder with default settings.
    pub fn new() -> Self {
        Self {
            system_prompt: Self::default_system_prompt().to_string(),
            max_display_name_length: 120,
        }
    }

    /// Set a custom system prompt.
    #[must_use]
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Set the maximum forwarded display-name length.
    #[must_use]
    pub fn with_max_display_name_length(mut self, length: usize) -> Self {
        self.max_display_name_length = length;
        self
    }

    /// Build the full prompt for one augmentation request.
    pub fn build_request_prompt(&self, request: &InferenceRequest) -> String {
        let base = request.descriptor.base;
        let role = request.semantic_role.as_deref().unwrap_or("none");
        let display_name = self.truncate(request.display_name.as_deref().unwrap_or("none"));

        format!(
            "{}\n\n\
             Analyze this color:\n\
             - OKLCH: lightness {:.3}, chroma {:.3}, hue {:.1}\n\
             - Deterministic name: \"{}\"\n\
             - Temperature: {:?}, perceptual weight {:.2} ({})\n\
             - Contrast on white {:.2}:1, on black {:.2}:1\n\
             - Semantic role: {}\n\
             - Display name: {}\n\n\
             Respond with JSON.",
            self.system_prompt,
            base.l(),
            base.c(),
            base.h(),
            request.descriptor.name,
            request.descriptor.analysis.temperature,
            request.weight_hint,
            request.descriptor.perceptual_weight.label,
            request.descriptor.accessibility.on_white.ratio,
            request.descriptor.accessibility.on_black.ratio,
            role,
            display_name,
        )
    }

    /// Truncate a forwarded value to the configured maximum, on a word
    /// boundary where possible.
    fn truncate(&self, value: &str) -> String {
        if value.len() <= self.max_display_name_length {
            return value.to_string();
        }
        let truncated = &value[..self.max_display_name_length];
        match truncated.rfind(' ') {
            Some(last_space) => format!("{}...", &truncated[..last_space]),
            None => format!("{truncated}..."),
        }
    }

    /// Default system prompt pinning the JSON output contract.
    const fn default_system_prompt() -> &'static str {
        r#"You are an expert in color psychology, branding, and accessible interface design.

TASK: Reason about the given color and produce design guidance.

OUTPUT FORMAT (JSON):
{
  "suggestedName": "Evocative two-to-three word name",
  "reasoning": "Why this color works, 2-3 sentences",
  "emotionalImpact": "The feeling it evokes",
  "culturalContext": "Cultural associations worth knowing",
  "accessibilityNotes": "Practical contrast and usage cautions",
  "usageGuidance": "Where it belongs in an interface",
  "balancingGuidance": "Optional: how to balance its visual weight"
}

GUIDELINES:
- Ground every claim in the numbers you were given; do not invent metrics.
- Accessibility notes must reference the provided contrast figures.
- Keep each field under 60 words.
- Respond with the JSON object only, no markdown fences."#
    }
}
