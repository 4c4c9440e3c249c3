//! Default method tests for the embedding provider port

use async_trait::async_trait;
use mme_domain::value_objects::EmbeddingVector;
use mme_domain::{EmbeddingProvider, Error, Result};

/// Provider returning a fixed batch regardless of input
struct FixedProvider {
    vectors: Vec<EmbeddingVector>,
}

#[async_trait]
impl EmbeddingProvider for FixedProvider {
    async fn embed_text(&self, _texts: &[String]) -> Result<Vec<EmbeddingVector>> {
        Ok(self.vectors.clone())
    }

    async fn embed_images(
        &self,
        _urls: &[String],
        _chunk_size: Option<usize>,
    ) -> Result<Vec<EmbeddingVector>> {
        Ok(self.vectors.clone())
    }

    fn model(&self) -> &str {
        "fixed"
    }

    fn provider_name(&self) -> &str {
        "fixed"
    }
}

#[tokio::test]
async fn test_embed_single_text_without_vectors_is_empty_result() {
    let provider = FixedProvider { vectors: vec![] };

    let result = provider.embed_single_text("hello").await;

    assert!(matches!(result, Err(Error::EmptyResult { .. })));
}

#[tokio::test]
async fn test_health_check_fails_without_vectors() {
    let provider = FixedProvider { vectors: vec![] };

    assert!(provider.health_check().await.is_err());
}

#[tokio::test]
async fn test_embed_single_text_returns_first_vector() {
    let provider = FixedProvider {
        vectors: vec![vec![0.1, 0.2]],
    };

    let vector = provider.embed_single_text("hello").await.unwrap();

    assert_eq!(vector, vec![0.1, 0.2]);
    assert_eq!(provider.dimensions(), None);
}
