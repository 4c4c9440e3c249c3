//! Remote transport implementations
//!
//! Implements `MultimodalEmbeddingTransport` for concrete remote services.

#[cfg(feature = "embedding-ark")]
pub mod ark_http;

#[cfg(feature = "embedding-ark")]
pub use ark_http::ArkHttpTransport;
