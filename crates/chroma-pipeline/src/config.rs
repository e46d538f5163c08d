//! Pipeline configuration.

use std::time::Duration;

use chroma_core::{ChromaError, ChromaResult};

/// Default deadline for one inference call.
pub const DEFAULT_INFERENCE_TIMEOUT: Duration = Duration::from_secs(30);

/// Default ceiling on concurrently processed seed items.
pub const DEFAULT_CONCURRENCY_LIMIT: usize = 10;

/// Tunables shared by the retrieval pipeline and the seed consumer.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Deadline for one inference call; a timeout is handled like any other
    /// inference failure.
    pub inference_timeout: Duration,
    /// Seed items processed concurrently within one chunk.
    pub concurrency_limit: usize,
}

impl PipelineConfig {
    /// Create a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `ChromaError::Validation` if the timeout is zero or the
    /// concurrency limit is zero.
    pub fn new(inference_timeout: Duration, concurrency_limit: usize) -> ChromaResult<Self> {
        if inference_timeout.is_zero() {
            return Err(ChromaError::validation("inference_timeout cannot be zero"));
        }
        if concurrency_limit == 0 {
            return Err(ChromaError::validation("concurrency_limit cannot be zero"));
        }
        Ok(Self {
            inference_timeout,
            concurrency_limit,
        })
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            inference_timeout: DEFAULT_INFERENCE_TIMEOUT,
            concurrency_limit: DEFAULT_CONCURRENCY_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.inference_timeout, Duration::from_secs(30));
        assert_eq!(config.concurrency_limit, 10);
    }

    #[test]
    fn test_validation_rejects_zeroes() {
        assert!(PipelineConfig::new(Duration::ZERO, 10).is_err());
        assert!(PipelineConfig::new(Duration::from_secs(1), 0).is_err());
        assert!(PipelineConfig::new(Duration::from_millis(50), 1).is_ok());
    }
}
