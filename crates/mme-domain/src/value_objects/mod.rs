//! Domain Value Objects
//!
//! Immutable value objects that describe what goes to the remote embedding
//! service and what comes back.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`EmbeddingInput`] | One text or image reference to embed |
//! | [`EmbeddingConfig`] | Model, chunk size, dimensions and credentials |
//! | [`ProviderCapabilities`] | Construction-time policy of one provider |
//! | [`EmbeddingResponse`] | Remote response with a single record or a list |
//! | [`ConfigurationWarning`] | Non-fatal notice about a dropped option |

/// Embedding configuration and provider capabilities
pub mod config;
/// Non-fatal diagnostics
pub mod diagnostics;
/// Request items
pub mod input;
/// Remote response shapes
pub mod response;

pub use config::{EmbeddingConfig, ProviderCapabilities};
pub use diagnostics::ConfigurationWarning;
pub use input::{EmbeddingInput, ImageUrl};
pub use response::{EmbeddingData, EmbeddingRecord, EmbeddingResponse, EmbeddingUsage};

/// One embedding vector; its length is decided by the remote model
pub type EmbeddingVector = Vec<f32>;
