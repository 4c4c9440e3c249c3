use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{EmbeddingInput, EmbeddingResponse};

/// Remote Multimodal Embedding Transport
///
/// Network communication, authentication and serialization with the remote
/// provider. One call is one remote request; batching happens above this
/// port.
///
/// Implementations report every failure (network, authentication, malformed
/// payload) as [`crate::Error::Transport`] and never retry.
#[async_trait]
pub trait MultimodalEmbeddingTransport: Send + Sync {
    /// Embed `input` with `model` in a single request
    async fn create_multimodal_embedding(
        &self,
        model: &str,
        input: &[EmbeddingInput],
    ) -> Result<EmbeddingResponse>;
}
