//! # Multimodal Embeddings - Provider Implementations
//!
//! Implementations of the ports defined in `mme-domain`.
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Embedding | `EmbeddingProvider` | Ark (batching adapter), Null |
//! | Transport | `MultimodalEmbeddingTransport` | Ark HTTP |
//! | Diagnostics | `DiagnosticSink` | Tracing, Memory |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! mme-providers = { version = "0.1", default-features = false, features = ["embedding-ark"] }
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use mme_providers::embedding::ArkEmbeddingProvider;
//! use mme_providers::diagnostics::TracingDiagnosticSink;
//! ```

// Re-export mme-domain types commonly used with providers
pub use mme_domain::error::{Error, Result};
pub use mme_domain::ports::{DiagnosticSink, EmbeddingProvider, MultimodalEmbeddingTransport};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Diagnostic sink implementations
pub mod diagnostics;

/// Embedding provider implementations
///
/// Implements `EmbeddingProvider` on top of a transport, including the
/// chunked batch runner.
pub mod embedding;

/// Remote transport implementations
///
/// Implements `MultimodalEmbeddingTransport` over HTTP.
pub mod transport;
