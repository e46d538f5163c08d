//! Deterministic stub implementation of [`InferenceProvider`].

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::InferenceError;
use crate::traits::{InferenceProvider, InferenceRequest};

/// What the stub returns for each call.
#[derive(Debug, Clone)]
pub enum StubResponseMode {
    /// Well-formed JSON wrapped in prose (the realistic happy path).
    Success,
    /// Prose with no extractable JSON object.
    Malformed,
    /// Transport-level failure.
    Unavailable,
    /// Sleep before answering; used to exercise caller-side timeouts.
    Delayed(Duration),
}

/// Canned inference provider with a call counter.
///
/// Responses are a pure function of the request (the suggested name echoes
/// the deterministic math name), so tests can assert exact outputs.
#[derive(Debug)]
pub struct StubInferenceProvider {
    mode: StubResponseMode,
    calls: AtomicUsize,
}

impl StubInferenceProvider {
    pub fn new(mode: StubResponseMode) -> Self {
        Self {
            mode,
            calls: AtomicUsize::new(0),
        }
    }

    /// Happy-path provider.
    pub fn succeeding() -> Self {
        Self::new(StubResponseMode::Success)
    }

    /// Number of `infer` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    fn success_body(request: &InferenceRequest) -> String {
        let name = &request.descriptor.name;
        let role = request.semantic_role.as_deref().unwrap_or("unspecified");
        format!(
            "Here is my analysis of the color.\n\
             {{\"suggestedName\":\"{name} reborn\",\
             \"reasoning\":\"Derived from the {name} family for the {role} role.\",\
             \"emotionalImpact\":\"steady\",\
             \"culturalContext\":\"broadly neutral\",\
             \"accessibilityNotes\":\"verify body-text contrast\",\
             \"usageGuidance\":\"surfaces and accents\"}}\n\
             Let me know if you need more."
        )
    }
}

#[async_trait]
impl InferenceProvider for StubInferenceProvider {
    async fn infer(&self, request: &InferenceRequest) -> Result<String, InferenceError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        debug!(name = %request.descriptor.name, "stub inference call");
        match &self.mode {
            StubResponseMode::Success => Ok(Self::success_body(request)),
            StubResponseMode::Malformed => {
                Ok("I could not produce structured output this time.".to_owned())
            }
            StubResponseMode::Unavailable => {
                Err(InferenceError::Unavailable("stub offline".to_owned()))
            }
            StubResponseMode::Delayed(delay) => {
                tokio::time::sleep(*delay).await;
                Ok(Self::success_body(request))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::describe;
    use crate::types::OklchColor;

    fn request() -> InferenceRequest {
        InferenceRequest::new(describe(&OklchColor::new(0.5, 0.12, 240.0).unwrap()))
    }

    #[tokio::test]
    async fn test_success_embeds_json_in_prose() {
        let provider = StubInferenceProvider::succeeding();
        let body = provider.infer(&request()).await.unwrap();
        assert!(body.contains("suggestedName"));
        assert!(body.starts_with("Here is my analysis"));
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_unavailable_mode_errors() {
        let provider = StubInferenceProvider::new(StubResponseMode::Unavailable);
        let err = provider.infer(&request()).await.unwrap_err();
        assert!(matches!(err, InferenceError::Unavailable(_)));
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_responses_are_deterministic() {
        let provider = StubInferenceProvider::succeeding();
        let a = provider.infer(&request()).await.unwrap();
        let b = provider.infer(&request()).await.unwrap();
        assert_eq!(a, b);
        assert_eq!(provider.calls(), 2);
    }
}
