//! # Multimodal Embeddings - Domain Layer
//!
//! Core types and port contracts for turning text and image references into
//! embedding vectors through a remote multimodal embedding service.
//!
//! ## Contents
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Domain error type and `Result` alias |
//! | [`value_objects`] | Request items, configuration, response shapes, warnings |
//! | [`ports`] | Provider, transport and diagnostic port traits |
//! | [`registry`] | Compile-time provider registration and lookup |
//! | [`constants`] | Provider defaults shared across layers |

/// Domain constants
pub mod constants;
/// Error handling types
pub mod error;
/// Port traits implemented by providers and infrastructure
pub mod ports;
/// Provider auto-registration
pub mod registry;
/// Immutable value objects
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{DiagnosticSink, EmbeddingProvider, MultimodalEmbeddingTransport};
pub use value_objects::{
    ConfigurationWarning, EmbeddingConfig, EmbeddingData, EmbeddingInput, EmbeddingRecord,
    EmbeddingResponse, EmbeddingVector, ImageUrl, ProviderCapabilities,
};
