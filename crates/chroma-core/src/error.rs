//! Error types for chroma-core.
//!
//! - [`ChromaError`]: top-level unified error for the whole system
//! - Sub-error types: [`CacheError`], [`InferenceError`]
//!
//! Failure policy (mirrors the retrieval contract): only malformed input is
//! fatal to a request. Cache failures degrade to a miss, inference failures
//! degrade to a math-only response; both are surfaced in-band as a status,
//! never thrown to the request caller.

use thiserror::Error;

// ============================================================================
// SUB-ERRORS
// ============================================================================

/// Vector cache failures.
///
/// The cache is an external, best-effort collaborator: a read failure is
/// treated as a miss and a write failure is logged without failing the
/// already-computed response.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Cache backend unreachable or refusing requests.
    #[error("cache unavailable: {0}")]
    Unavailable(String),

    /// Upsert was attempted and rejected or lost.
    #[error("cache write failed: {0}")]
    WriteFailed(String),

    /// Stored metadata could not be serialized or deserialized.
    #[error("cache serialization error: {0}")]
    Serialization(String),
}

/// Inference service failures.
///
/// All variants collapse to the same pipeline outcome (`ERROR_FALLBACK`):
/// the math-only descriptor is returned with status `error` and the message
/// carried in-band.
#[derive(Debug, Error)]
pub enum InferenceError {
    /// The call exceeded the configured deadline.
    #[error("inference timed out after {0} ms")]
    Timeout(u64),

    /// The service was unreachable or returned a transport-level failure.
    #[error("inference unavailable: {0}")]
    Unavailable(String),

    /// The response carried no extractable JSON object.
    #[error("inference response malformed: {0}")]
    Malformed(String),
}

// ============================================================================
// TOP-LEVEL UNIFIED ERROR TYPE
// ============================================================================

/// Top-level unified error type for the color identity system.
///
/// All crate errors are convertible to this type via `From`.
#[derive(Debug, Error)]
pub enum ChromaError {
    /// Malformed or out-of-range color input.
    ///
    /// The only error kind that is rejected before any I/O and surfaced to
    /// the request caller.
    #[error("validation error: {0}")]
    Validation(String),

    /// Vector cache failure.
    #[error("cache error: {0}")]
    Cache(#[from] CacheError),

    /// Inference service failure.
    #[error("inference error: {0}")]
    Inference(#[from] InferenceError),

    /// Invariant violation or unrecoverable internal state.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ChromaError {
    /// Create a validation error from a message.
    #[inline]
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an internal error from a message.
    #[inline]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Check if this error is recoverable via retry.
    ///
    /// Cache unavailability and inference timeouts/outages are transient;
    /// validation and serialization failures are not.
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Cache(CacheError::Unavailable(_) | CacheError::WriteFailed(_))
                | Self::Inference(InferenceError::Timeout(_) | InferenceError::Unavailable(_))
        )
    }
}

/// Result type alias for chroma operations.
pub type ChromaResult<T> = std::result::Result<T, ChromaError>;
