//! Embedding Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Status |
//! |----------|------|--------|
//! | ArkEmbeddingProvider | Cloud, multimodal | Complete |
//! | NullEmbeddingProvider | Testing | Complete |
//!
//! Remote providers delegate to [`batch::run_batches`], which owns chunking,
//! response normalization and ordering.

#[cfg(feature = "embedding-ark")]
pub mod ark;
pub mod batch;
pub mod helpers;
#[cfg(feature = "embedding-null")]
pub mod null;

// Re-export for convenience
#[cfg(feature = "embedding-ark")]
pub use ark::{ARK_CAPABILITIES, ArkEmbeddingProvider};
pub use batch::run_batches;
pub use helpers::constructor;
#[cfg(feature = "embedding-null")]
pub use null::NullEmbeddingProvider;
