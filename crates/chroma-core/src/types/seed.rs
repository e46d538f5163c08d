//! Seed backlog items consumed by the batch seeder.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::OklchColor;

/// One pending color awaiting cache seeding.
///
/// Created by an external seeding process and delivered in batches. The
/// consumer only classifies the outcome of each delivery as acknowledge or
/// retry; redelivery cadence and max attempts belong to the queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedItem {
    /// Delivery identity, stable across redeliveries.
    pub id: Uuid,
    pub color: OklchColor,
    /// Semantic role token forwarded to the inference service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_role: Option<String>,
    /// Human display name forwarded to the inference service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub enqueued_at: DateTime<Utc>,
    /// Delivery attempts so far, maintained by the queue.
    #[serde(default)]
    pub attempts: u32,
}

impl SeedItem {
    /// Create a fresh seed item for `color`.
    pub fn new(color: OklchColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            color,
            semantic_role: None,
            display_name: None,
            enqueued_at: Utc::now(),
            attempts: 0,
        }
    }

    /// Set the semantic role token.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.semantic_role = Some(role.into());
        self
    }

    /// Set the display name.
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}
