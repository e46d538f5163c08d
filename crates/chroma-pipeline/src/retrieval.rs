//! The cache-or-generate retrieval pipeline.
//!
//! Per-request flow: fast path (adhoc) → cache lookup → cache hit, or math
//! fallback, or synchronous augment-and-store, or error fallback. The
//! pipeline is request-scoped and stateless between calls; any number of
//! instances or workers can run against the same collaborators.
//!
//! Failure policy: the caller never sees an error for a degraded
//! collaborator. Cache read failures downgrade to misses, inference
//! failures (including timeouts) downgrade to a math-only response with
//! status `error`, and upsert failures are logged without revoking the
//! already-computed result. Only malformed color input is rejected, and
//! that happens at `OklchColor` construction, before a request exists.
//!
//! Concurrency note: augmentations for the same fingerprint may race; the
//! cache contract is unconditional upsert, so duplicates are redundant work
//! resolved last-write-wins, not a correctness failure.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, warn};

use chroma_core::engine::describe;
use chroma_core::fingerprint::pending_correlation_id;
use chroma_core::intelligence_key;
use chroma_core::traits::{CacheEntry, InferenceProvider, InferenceRequest, VectorCache};
use chroma_core::types::ColorDescriptor;
use chroma_core::{ChromaResult, InferenceError, OklchColor};

use crate::config::PipelineConfig;
use crate::embedding::derive_embedding;
use crate::extract::extract_intelligence;
use crate::prompt::ColorPromptBuilder;

/// One color request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRequest {
    pub color: OklchColor,
    /// Skip cache and inference entirely; return pure math.
    #[serde(default)]
    pub adhoc: bool,
    /// Block for augmentation on a cache miss.
    #[serde(default)]
    pub sync: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl ColorRequest {
    /// Math-only request: no cache, no inference.
    pub fn adhoc(color: OklchColor) -> Self {
        Self {
            color,
            adhoc: true,
            sync: false,
            semantic_role: None,
            display_name: None,
        }
    }

    /// Cache-or-math request; augmentation happens in the background.
    pub fn cached(color: OklchColor) -> Self {
        Self {
            color,
            adhoc: false,
            sync: false,
            semantic_role: None,
            display_name: None,
        }
    }

    /// Cache-or-augment request; blocks for inference on a miss.
    pub fn synchronous(color: OklchColor) -> Self {
        Self {
            color,
            adhoc: false,
            sync: true,
            semantic_role: None,
            display_name: None,
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.semantic_role = Some(role.into());
        self
    }

    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

/// Outcome class of a request, reported in-band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// A complete descriptor was produced (cached, adhoc, or augmented).
    Found,
    /// Math-only result returned; augmentation is pending elsewhere.
    Generating,
    /// Inference failed; math-only result returned with the message.
    Error,
}

/// The response for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorResponse {
    pub descriptor: ColorDescriptor,
    pub status: RequestStatus,
    /// `pending-ai-<fingerprint>` when status is `generating`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    /// Inference failure message when status is `error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Whether the descriptor came from the cache verbatim.
    #[serde(default)]
    pub cached: bool,
}

impl ColorResponse {
    fn found(descriptor: ColorDescriptor, cached: bool) -> Self {
        Self {
            descriptor,
            status: RequestStatus::Found,
            correlation_id: None,
            error: None,
            cached,
        }
    }

    fn generating(descriptor: ColorDescriptor, correlation_id: String) -> Self {
        Self {
            descriptor,
            status: RequestStatus::Generating,
            correlation_id: Some(correlation_id),
            error: None,
            cached: false,
        }
    }

    fn error_fallback(descriptor: ColorDescriptor, error: &InferenceError) -> Self {
        Self {
            descriptor,
            status: RequestStatus::Error,
            correlation_id: None,
            error: Some(error.to_string()),
            cached: false,
        }
    }
}

/// Cache-or-generate orchestrator.
pub struct RetrievalPipeline {
    cache: Arc<dyn VectorCache>,
    inference: Arc<dyn InferenceProvider>,
    prompts: ColorPromptBuilder,
    config: PipelineConfig,
}

impl RetrievalPipeline {
    pub fn new(
        cache: Arc<dyn VectorCache>,
        inference: Arc<dyn InferenceProvider>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            cache,
            inference,
            prompts: ColorPromptBuilder::new(),
            config,
        }
    }

    /// Replace the prompt builder (custom system prompts).
    #[must_use]
    pub fn with_prompt_builder(mut self, prompts: ColorPromptBuilder) -> Self {
        self.prompts = prompts;
        self
    }

    /// Service one color request.
    ///
    /// # Errors
    ///
    /// With a validated [`OklchColor`] this does not fail: collaborator
    /// failures are absorbed into the response status. The `Result` exists
    /// for callers that feed unvalidated input through serde, where
    /// validation errors surface before a request is ever built.
    pub async fn retrieve(&self, request: &ColorRequest) -> ChromaResult<ColorResponse> {
        if request.adhoc {
            debug!("adhoc request, fast path");
            return Ok(ColorResponse::found(describe(&request.color), false));
        }

        let key = intelligence_key(&request.color);
        match self.cache.get(&key).await {
            Ok(Some(entry)) => match ColorDescriptor::from_metadata(entry.metadata) {
                Ok(descriptor) => {
                    debug!(%key, "cache hit");
                    return Ok(ColorResponse::found(descriptor, true));
                }
                Err(error) => {
                    warn!(%key, %error, "cache entry undecodable, regenerating");
                }
            },
            Ok(None) => debug!(%key, "cache miss"),
            Err(error) => {
                warn!(%key, %error, "cache unavailable, treating as miss");
            }
        }

        let descriptor = describe(&request.color);
        if !request.sync {
            return Ok(ColorResponse::generating(
                descriptor,
                pending_correlation_id(&request.color),
            ));
        }

        Ok(self.augment_and_store(request, descriptor, &key).await)
    }

    /// Synchronous augmentation: inference → extraction → merge → upsert.
    ///
    /// The upsert completes (or is confirmed failed) before the `found`
    /// response is returned.
    async fn augment_and_store(
        &self,
        request: &ColorRequest,
        descriptor: ColorDescriptor,
        key: &str,
    ) -> ColorResponse {
        let inference_request = InferenceRequest::new(descriptor.clone())
            .with_role(request.semantic_role.clone())
            .with_display_name(request.display_name.clone());
        let prompt = self.prompts.build_request_prompt(&inference_request);
        let inference_request = inference_request.with_prompt(prompt);

        let deadline = self.config.inference_timeout;
        let raw = match timeout(deadline, self.inference.infer(&inference_request)).await {
            Ok(Ok(raw)) => raw,
            Ok(Err(error)) => {
                warn!(%key, %error, "inference failed");
                return ColorResponse::error_fallback(descriptor, &error);
            }
            Err(_) => {
                let error = InferenceError::Timeout(deadline.as_millis() as u64);
                warn!(%key, %error, "inference timed out");
                return ColorResponse::error_fallback(descriptor, &error);
            }
        };

        let intelligence = match extract_intelligence(&raw) {
            Ok(intelligence) => intelligence,
            Err(error) => {
                warn!(%key, %error, "inference response unusable");
                return ColorResponse::error_fallback(descriptor, &error);
            }
        };

        let mut augmented = descriptor;
        augmented.intelligence = Some(intelligence);

        let embedding = derive_embedding(&augmented);
        match augmented.to_metadata() {
            Ok(metadata) => {
                let entry = CacheEntry::new(key, embedding, metadata);
                match self.cache.upsert(entry).await {
                    Ok(()) => debug!(%key, "augmented descriptor stored"),
                    Err(error) => {
                        // best-effort persistence: the computed result stands
                        warn!(%key, %error, "cache upsert failed");
                    }
                }
            }
            Err(error) => warn!(%key, %error, "descriptor not serializable, skipping store"),
        }

        ColorResponse::found(augmented, false)
    }
}
