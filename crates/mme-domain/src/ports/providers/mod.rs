//! External service provider ports

/// Uniform embedding interface exposed to callers
pub mod embedding;
/// Remote multimodal embedding transport
pub mod transport;

pub use embedding::EmbeddingProvider;
pub use transport::MultimodalEmbeddingTransport;
