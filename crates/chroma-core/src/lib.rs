//! Chroma Core Library
//!
//! Deterministic, perceptually-grounded color identities in OKLCH space.
//!
//! # Architecture
//!
//! This crate defines:
//! - Domain types (`OklchColor`, `ColorDescriptor`, `SeedItem`, etc.)
//! - The pure color computation engine (`engine::describe`)
//! - Fingerprint / cache-key derivation (`fingerprint`)
//! - Collaborator traits (`VectorCache`, `InferenceProvider`)
//! - Error types and result aliases
//! - In-memory stub implementations for tests and development
//!
//! Everything in this crate except the stubs is pure and deterministic: for a
//! fixed input color, two processes produce bit-identical descriptors and
//! cache keys.
//!
//! # Example
//!
//! ```
//! use chroma_core::types::OklchColor;
//! use chroma_core::engine::describe;
//!
//! let color = OklchColor::new(0.7, 0.15, 260.0).unwrap();
//! let descriptor = describe(&color);
//! assert_eq!(descriptor.scale.len(), 11);
//! assert_eq!(descriptor.name, "bone-honest-violet");
//! ```

pub mod engine;
pub mod error;
pub mod fingerprint;
pub mod stubs;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use error::{CacheError, ChromaError, ChromaResult, InferenceError};
pub use fingerprint::{fingerprint, intelligence_key};
pub use types::{ColorDescriptor, OklchColor, SeedItem};
