//! Provider bootstrap
//!
//! Turns a loaded [`AppConfig`] into a ready embedding provider. Warnings
//! raised while normalizing the provider configuration go to `tracing`.

use std::path::Path;
use std::sync::Arc;

use mme_domain::error::Result;
use mme_domain::ports::EmbeddingProvider;
use mme_domain::registry::resolve_embedding_provider;
use mme_providers::diagnostics::TracingDiagnosticSink;
use tracing::info;

use crate::config::{AppConfig, ConfigLoader};

/// Create the embedding provider named by `config.embedding.provider`
pub fn create_embedding_provider(config: &AppConfig) -> Result<Arc<dyn EmbeddingProvider>> {
    let provider = resolve_embedding_provider(&config.embedding, Arc::new(TracingDiagnosticSink))?;

    info!(
        provider = provider.provider_name(),
        model = provider.model(),
        chunk_size = config.embedding.chunk_size,
        "Embedding provider ready"
    );

    Ok(provider)
}

/// Load configuration and create the embedding provider in one step
///
/// Uses `config_path` when given, otherwise the discovered default file.
pub fn load_embedding_provider(
    config_path: Option<&Path>,
) -> Result<(AppConfig, Arc<dyn EmbeddingProvider>)> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader.load()?;
    let provider = create_embedding_provider(&config)?;
    Ok((config, provider))
}
