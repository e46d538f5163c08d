//! In-memory implementation of [`VectorCache`].
//!
//! # WARNING: TEST / DEVELOPMENT ONLY
//!
//! - O(n) similarity search (full scan, no ANN index)
//! - no persistence; data is lost on drop
//! - uses `DashMap` for concurrent access without external locking

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::info;

use crate::error::ChromaResult;
use crate::traits::{CacheEntry, VectorCache};

/// DashMap-backed vector cache.
#[derive(Debug, Default)]
pub struct InMemoryVectorCache {
    entries: DashMap<String, CacheEntry>,
}

impl InMemoryVectorCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        info!("creating InMemoryVectorCache (test/dev only)");
        Self {
            entries: DashMap::new(),
        }
    }
}

/// Cosine similarity between two vectors; 0.0 when either has no magnitude
/// or the dimensions disagree.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let mag_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let mag_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }
    dot / (mag_a * mag_b)
}

#[async_trait]
impl VectorCache for InMemoryVectorCache {
    async fn get(&self, key: &str) -> ChromaResult<Option<CacheEntry>> {
        Ok(self.entries.get(key).map(|entry| entry.clone()))
    }

    async fn upsert(&self, entry: CacheEntry) -> ChromaResult<()> {
        self.entries.insert(entry.key.clone(), entry);
        Ok(())
    }

    async fn search(&self, embedding: &[f32], top_k: usize) -> ChromaResult<Vec<(String, f32)>> {
        let mut scored: Vec<(String, f32)> = self
            .entries
            .iter()
            .map(|entry| {
                (
                    entry.key().clone(),
                    cosine_similarity(embedding, &entry.embedding),
                )
            })
            .collect();
        // descending by score, key as deterministic tie-break
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        scored.truncate(top_k);
        Ok(scored)
    }

    async fn count(&self) -> ChromaResult<usize> {
        Ok(self.entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, embedding: Vec<f32>) -> CacheEntry {
        CacheEntry::new(key, embedding, serde_json::json!({}))
    }

    #[tokio::test]
    async fn test_get_miss_then_hit() {
        let cache = InMemoryVectorCache::new();
        assert!(cache.get("k").await.unwrap().is_none());

        cache.upsert(entry("k", vec![1.0, 0.0])).await.unwrap();
        let hit = cache.get("k").await.unwrap().unwrap();
        assert_eq!(hit.key, "k");
        assert_eq!(cache.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_upsert_overwrites_whole_entry() {
        let cache = InMemoryVectorCache::new();
        cache.upsert(entry("k", vec![1.0, 0.0])).await.unwrap();
        cache.upsert(entry("k", vec![0.0, 1.0])).await.unwrap();

        let hit = cache.get("k").await.unwrap().unwrap();
        assert_eq!(hit.embedding, vec![0.0, 1.0]);
        assert_eq!(cache.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_search_ranks_by_cosine() {
        let cache = InMemoryVectorCache::new();
        cache.upsert(entry("aligned", vec![1.0, 0.0])).await.unwrap();
        cache.upsert(entry("orthogonal", vec![0.0, 1.0])).await.unwrap();
        cache
            .upsert(entry("diagonal", vec![1.0, 1.0]))
            .await
            .unwrap();

        let results = cache.search(&[1.0, 0.0], 2).await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, "aligned");
        assert!((results[0].1 - 1.0).abs() < 1e-6);
        assert_eq!(results[1].0, "diagonal");
    }

    #[tokio::test]
    async fn test_search_empty_cache() {
        let cache = InMemoryVectorCache::new();
        assert!(cache.search(&[1.0], 5).await.unwrap().is_empty());
    }

    #[test]
    fn test_cosine_degenerate_inputs() {
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
    }
}
