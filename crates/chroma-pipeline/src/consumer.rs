//! Batch seed consumer.
//!
//! Drains a backlog of pending colors through the retrieval pipeline in
//! `sync` mode. The batch is partitioned into chunks no larger than the
//! configured concurrency limit; chunks run sequentially, items within a
//! chunk concurrently, so the inference service never sees more than
//! `concurrency_limit` in-flight calls from one consumer.
//!
//! The consumer only classifies outcomes: success acknowledges the item,
//! any failure returns it for redelivery. Backoff cadence and max attempts
//! belong to the external queue; no per-item failure aborts the batch.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use chroma_core::types::SeedItem;

use crate::retrieval::{ColorRequest, RequestStatus, RetrievalPipeline};

/// What the queue should do with a delivered item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    /// Remove the item from the backlog.
    Ack,
    /// Return the item for redelivery.
    Retry,
}

/// Per-item outcome of one batch pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedOutcome {
    pub item_id: Uuid,
    pub disposition: Disposition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Monotonic consumer counters snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConsumerStats {
    pub processed: u64,
    pub acked: u64,
    pub retried: u64,
}

#[derive(Debug, Default)]
struct StatsInner {
    processed: AtomicU64,
    acked: AtomicU64,
    retried: AtomicU64,
}

/// Bounded-concurrency consumer over the retrieval pipeline.
pub struct SeedConsumer {
    pipeline: Arc<RetrievalPipeline>,
    concurrency_limit: usize,
    stats: StatsInner,
}

impl SeedConsumer {
    /// Create a consumer. The chunk width comes from the pipeline's
    /// configured concurrency limit.
    pub fn new(pipeline: Arc<RetrievalPipeline>, concurrency_limit: usize) -> Self {
        Self {
            pipeline,
            concurrency_limit: concurrency_limit.max(1),
            stats: StatsInner::default(),
        }
    }

    /// Process one delivered batch, returning a disposition per item in
    /// input order. An empty batch is a no-op: no collaborator calls.
    pub async fn process(&self, items: &[SeedItem]) -> Vec<SeedOutcome> {
        if items.is_empty() {
            debug!("empty seed batch, nothing to do");
            return Vec::new();
        }

        info!(
            items = items.len(),
            chunk_size = self.concurrency_limit,
            "processing seed batch"
        );

        let mut outcomes = Vec::with_capacity(items.len());
        for chunk in items.chunks(self.concurrency_limit) {
            let chunk_outcomes = join_all(chunk.iter().map(|item| self.process_item(item))).await;
            outcomes.extend(chunk_outcomes);
        }
        outcomes
    }

    async fn process_item(&self, item: &SeedItem) -> SeedOutcome {
        let mut request = ColorRequest::synchronous(item.color);
        request.semantic_role = item.semantic_role.clone();
        request.display_name = item.display_name.clone();

        let (disposition, error) = match self.pipeline.retrieve(&request).await {
            Ok(response) if response.status == RequestStatus::Error => {
                (Disposition::Retry, response.error)
            }
            Ok(_) => (Disposition::Ack, None),
            Err(error) => (Disposition::Retry, Some(error.to_string())),
        };

        self.stats.processed.fetch_add(1, Ordering::Relaxed);
        match disposition {
            Disposition::Ack => self.stats.acked.fetch_add(1, Ordering::Relaxed),
            Disposition::Retry => self.stats.retried.fetch_add(1, Ordering::Relaxed),
        };

        debug!(item = %item.id, ?disposition, "seed item classified");
        SeedOutcome {
            item_id: item.id,
            disposition,
            error,
        }
    }

    /// Snapshot of the counters.
    pub fn stats(&self) -> ConsumerStats {
        ConsumerStats {
            processed: self.stats.processed.load(Ordering::Relaxed),
            acked: self.stats.acked.load(Ordering::Relaxed),
            retried: self.stats.retried.load(Ordering::Relaxed),
        }
    }
}
