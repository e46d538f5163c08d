//! Collaborator traits.
//!
//! The vector cache and the inference service are external, rate-limited
//! systems; these traits define the only contract the core relies on.
//! Implementations must be `Send + Sync` for use across async workers.

mod inference;
mod vector_cache;

pub use inference::{InferenceProvider, InferenceRequest};
pub use vector_cache::{CacheEntry, VectorCache};
