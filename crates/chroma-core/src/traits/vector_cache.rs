//! Vector cache trait: key → (embedding, metadata) with similarity search.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ChromaResult;

/// One cache record.
///
/// `metadata` round-trips a serialized descriptor. Readers must tolerate
/// shapes written by older processes (missing newer optional fields) and
/// reconstruct a valid descriptor by defaulting, not fail the read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub key: String,
    pub embedding: Vec<f32>,
    pub metadata: serde_json::Value,
}

impl CacheEntry {
    pub fn new(key: impl Into<String>, embedding: Vec<f32>, metadata: serde_json::Value) -> Self {
        Self {
            key: key.into(),
            embedding,
            metadata,
        }
    }
}

/// Key-value vector store with unconditional upsert.
///
/// The store offers no compare-and-swap: concurrent writers for the same key
/// are resolved last-write-wins, and callers treat duplicate writes as
/// redundant work rather than errors.
///
/// # Implementation Notes
///
/// - All errors use [`CacheError`](crate::error::CacheError) variants wrapped
///   in `ChromaError`; callers downgrade read errors to misses.
/// - Implementations should log failures via `tracing` before returning.
#[async_trait]
pub trait VectorCache: Send + Sync {
    /// Fetch an entry by exact key.
    ///
    /// # Errors
    /// - `CacheError::Unavailable` - backend unreachable
    async fn get(&self, key: &str) -> ChromaResult<Option<CacheEntry>>;

    /// Insert or overwrite an entry (never a partial merge).
    ///
    /// # Errors
    /// - `CacheError::Unavailable` - backend unreachable
    /// - `CacheError::WriteFailed` - write rejected or lost
    async fn upsert(&self, entry: CacheEntry) -> ChromaResult<()>;

    /// Top-k entries by embedding similarity, `(key, score)` descending.
    ///
    /// Consumed by the external semantic-search surface, not by the
    /// retrieval pipeline's core path.
    ///
    /// # Errors
    /// - `CacheError::Unavailable` - backend unreachable
    async fn search(&self, embedding: &[f32], top_k: usize) -> ChromaResult<Vec<(String, f32)>>;

    /// Number of stored entries.
    async fn count(&self) -> ChromaResult<usize>;
}
