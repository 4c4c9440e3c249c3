use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::value_objects::EmbeddingVector;

/// Uniform Embedding Interface
///
/// The contract the retrieval layer programs against. Every implementation
/// returns exactly one vector per input, in input order, or fails as a whole.
///
/// # Default Implementations
///
/// `embed_single_text()` delegates to `embed_text()` with a single item and
/// `health_check()` embeds a fixed probe string. Providers only need to
/// implement the batch operations.
///
/// # Example
///
/// ```ignore
/// use mme_domain::ports::EmbeddingProvider;
///
/// let provider: Arc<dyn EmbeddingProvider> = resolve_embedding_provider(&config, sink)?;
///
/// let query = provider.embed_single_text("red bicycle").await?;
/// let images = provider
///     .embed_images(&["https://example.com/bike.jpg".to_string()], None)
///     .await?;
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed texts, one vector per text in the same order
    ///
    /// An empty slice yields an empty result without contacting the provider.
    async fn embed_text(&self, texts: &[String]) -> Result<Vec<EmbeddingVector>>;

    /// Embed a single text (default implementation provided)
    async fn embed_single_text(&self, text: &str) -> Result<EmbeddingVector> {
        let embeddings = self.embed_text(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| Error::empty_result("No embedding returned for single text"))
    }

    /// Embed images referenced by URL, one vector per URL in the same order
    ///
    /// `chunk_size` overrides the configured number of inputs per request.
    async fn embed_images(
        &self,
        urls: &[String],
        chunk_size: Option<usize>,
    ) -> Result<Vec<EmbeddingVector>>;

    /// Model identifier in effect after construction-time normalization
    fn model(&self) -> &str;

    /// Name/identifier of this provider implementation (e.g. "ark", "null")
    fn provider_name(&self) -> &str;

    /// Vector length, when known before calling the provider
    ///
    /// Remote multimodal models decide the length themselves, so the default
    /// is `None` and callers must read it from the returned vectors.
    fn dimensions(&self) -> Option<usize> {
        None
    }

    /// Health check for the provider (default implementation provided)
    async fn health_check(&self) -> Result<()> {
        self.embed_single_text("health check").await?;
        Ok(())
    }
}
