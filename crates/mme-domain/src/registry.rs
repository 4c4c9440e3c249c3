//! Embedding Provider Registry
//!
//! Auto-registration system for embedding providers using linkme distributed
//! slices. Providers register themselves at compile time and are selected at
//! runtime by the `provider` field of [`EmbeddingConfig`].
//!
//! ```text
//! provider crate:  #[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
//!                  static ENTRY: EmbeddingProviderEntry = ...
//!                        ↓
//! resolver:        EMBEDDING_PROVIDERS.iter()
//!                        ↓
//! config:          provider = "ark"  →  ArkEmbeddingProvider
//! ```

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::ports::{DiagnosticSink, EmbeddingProvider};
use crate::value_objects::EmbeddingConfig;

/// Factory signature shared by every registered provider
pub type EmbeddingProviderFactory =
    fn(&EmbeddingConfig, Arc<dyn DiagnosticSink>) -> Result<Arc<dyn EmbeddingProvider>>;

/// Registry entry for embedding providers
///
/// Each provider implementation registers itself with this entry using
/// `#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]`.
pub struct EmbeddingProviderEntry {
    /// Unique provider name (e.g., "ark", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: EmbeddingProviderFactory,
}

// Providers submit entries at compile time
#[linkme::distributed_slice]
pub static EMBEDDING_PROVIDERS: [EmbeddingProviderEntry] = [..];

/// Resolve embedding provider by name from registry
///
/// Searches the registry for the provider named by `config.provider` and
/// creates an instance with the given diagnostic sink.
///
/// # Example
///
/// ```ignore
/// let config = EmbeddingConfig::new("ark").with_api_key("ak-...");
/// let provider = resolve_embedding_provider(&config, Arc::new(TracingDiagnosticSink))?;
/// ```
pub fn resolve_embedding_provider(
    config: &EmbeddingConfig,
    sink: Arc<dyn DiagnosticSink>,
) -> Result<Arc<dyn EmbeddingProvider>> {
    let provider_name = config.provider.trim();

    if let Some(entry) = EMBEDDING_PROVIDERS.iter().find(|e| e.name == provider_name) {
        return (entry.factory)(config, sink);
    }

    let available: Vec<&str> = EMBEDDING_PROVIDERS.iter().map(|e| e.name).collect();

    Err(Error::Configuration {
        message: format!(
            "Unknown embedding provider '{provider_name}'. Available providers: {available:?}"
        ),
        source: Some(Box::new(Error::not_found(provider_name.to_string()))),
    })
}

/// List all registered embedding providers as (name, description) pairs
pub fn list_embedding_providers() -> Vec<(&'static str, &'static str)> {
    EMBEDDING_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
