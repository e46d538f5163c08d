//! In-memory stub implementations of the collaborator traits.
//!
//! # WARNING: TEST / DEVELOPMENT ONLY
//!
//! Production deployments point the pipeline at a real vector database and
//! a real inference service. These stubs exist for unit and integration
//! tests: they are deterministic, hold everything in process memory, and
//! scan linearly on search.

mod inference_stub;
mod memory_cache;

pub use inference_stub::{StubInferenceProvider, StubResponseMode};
pub use memory_cache::InMemoryVectorCache;
