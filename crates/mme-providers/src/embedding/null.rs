//! Null embedding provider for testing and development
//!
//! Provides deterministic, hash-based embeddings for text and images.
//! No external dependencies - always works offline.

use std::sync::Arc;

use async_trait::async_trait;

use mme_domain::constants::NULL_PROVIDER_NAME;
use mme_domain::error::Result;
use mme_domain::ports::{DiagnosticSink, EmbeddingProvider};
use mme_domain::value_objects::{EmbeddingConfig, EmbeddingInput, EmbeddingVector};

use crate::constants::{EMBEDDING_DIMENSION_NULL, NULL_MODEL_NAME};
use crate::embedding::helpers::effective_chunk_size;

/// Null embedding provider for testing
///
/// Returns fixed-size vectors derived from the input content, so equal
/// inputs always map to equal vectors.
///
/// # Example
///
/// ```rust
/// use mme_domain::ports::EmbeddingProvider;
/// use mme_providers::embedding::NullEmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new();
/// assert_eq!(provider.dimensions(), Some(384));
/// assert_eq!(provider.provider_name(), "null");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEmbeddingProvider;

impl NullEmbeddingProvider {
    /// Create a new null embedding provider
    pub fn new() -> Self {
        Self
    }

    fn embed_items(items: &[EmbeddingInput]) -> Vec<EmbeddingVector> {
        items.iter().map(Self::embed_item).collect()
    }

    fn embed_item(item: &EmbeddingInput) -> EmbeddingVector {
        let hash = item
            .content()
            .chars()
            .map(|c| c as u32)
            .fold(u32::from(!item.is_text()), u32::wrapping_add);
        let base_value = (hash % 1000) as f32 / 1000.0;

        (0..EMBEDDING_DIMENSION_NULL)
            .map(|j| {
                let variation = (j as f32 * 0.01).sin();
                (base_value + variation * 0.1).clamp(0.0, 1.0)
            })
            .collect()
    }
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed_text(&self, texts: &[String]) -> Result<Vec<EmbeddingVector>> {
        let items: Vec<EmbeddingInput> = texts.iter().map(EmbeddingInput::text).collect();
        Ok(Self::embed_items(&items))
    }

    async fn embed_images(
        &self,
        urls: &[String],
        chunk_size: Option<usize>,
    ) -> Result<Vec<EmbeddingVector>> {
        effective_chunk_size(1, chunk_size)?;
        let items: Vec<EmbeddingInput> = urls.iter().map(EmbeddingInput::image_url).collect();
        Ok(Self::embed_items(&items))
    }

    fn model(&self) -> &str {
        NULL_MODEL_NAME
    }

    fn provider_name(&self) -> &str {
        NULL_PROVIDER_NAME
    }

    fn dimensions(&self) -> Option<usize> {
        Some(EMBEDDING_DIMENSION_NULL)
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use mme_domain::registry::{EMBEDDING_PROVIDERS, EmbeddingProviderEntry};

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static NULL_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: NULL_PROVIDER_NAME,
    description: "Null provider for testing (deterministic hash-based embeddings)",
    factory: null_factory,
};

fn null_factory(
    _config: &EmbeddingConfig,
    _diagnostics: Arc<dyn DiagnosticSink>,
) -> Result<Arc<dyn EmbeddingProvider>> {
    Ok(Arc::new(NullEmbeddingProvider::new()))
}
