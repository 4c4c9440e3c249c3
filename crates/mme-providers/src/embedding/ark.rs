//! Ark Multimodal Embedding Provider
//!
//! Implements the EmbeddingProvider port on top of Volcengine Ark's
//! multimodal embedding endpoint, which accepts text and image inputs in one
//! request format but decides the vector length on its own.

use std::sync::Arc;

use async_trait::async_trait;

use mme_domain::constants::{ARK_DEFAULT_MODEL, ARK_PROVIDER_NAME};
use mme_domain::error::Result;
use mme_domain::ports::{DiagnosticSink, EmbeddingProvider, MultimodalEmbeddingTransport};
use mme_domain::value_objects::{
    EmbeddingConfig, EmbeddingInput, EmbeddingVector, ProviderCapabilities,
};

use crate::embedding::batch::run_batches;
use crate::embedding::helpers::effective_chunk_size;
use crate::transport::ArkHttpTransport;

/// Construction-time policy for Ark: output dimensions cannot be requested
pub const ARK_CAPABILITIES: ProviderCapabilities = ProviderCapabilities {
    name: ARK_PROVIDER_NAME,
    default_model: ARK_DEFAULT_MODEL,
    supports_custom_dimensions: false,
};

/// Ark embedding provider
///
/// Chunks inputs into bounded requests, normalizes scalar and list responses
/// and concatenates vectors in input order. Receives its transport via
/// constructor injection.
///
/// ## Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use mme_domain::ports::EmbeddingProvider;
/// use mme_domain::value_objects::EmbeddingConfig;
/// use mme_providers::diagnostics::TracingDiagnosticSink;
/// use mme_providers::embedding::ArkEmbeddingProvider;
///
/// fn example() -> mme_domain::Result<()> {
///     let config = EmbeddingConfig::new("ark")
///         .with_api_key("your-api-key")
///         .with_chunk_size(4);
///     let provider =
///         ArkEmbeddingProvider::from_config(&config, Arc::new(TracingDiagnosticSink))?;
///     assert_eq!(provider.model(), "doubao-embedding-vision-250615");
///     Ok(())
/// }
/// ```
pub struct ArkEmbeddingProvider {
    config: EmbeddingConfig,
    transport: Arc<dyn MultimodalEmbeddingTransport>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl ArkEmbeddingProvider {
    /// Create a new Ark embedding provider
    ///
    /// Normalizes `config` against [`ARK_CAPABILITIES`]: requested dimensions
    /// are dropped with one warning to `diagnostics`, an empty model becomes
    /// the default model, and a zero chunk size is rejected.
    ///
    /// # Arguments
    /// * `config` - Embedding configuration
    /// * `transport` - Shared handle to the remote service
    /// * `diagnostics` - Sink for non-fatal warnings
    pub fn new(
        config: EmbeddingConfig,
        transport: Arc<dyn MultimodalEmbeddingTransport>,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> Result<Self> {
        let config = config.normalize_for(&ARK_CAPABILITIES, diagnostics.as_ref())?;

        Ok(Self {
            config,
            transport,
            diagnostics,
        })
    }

    /// Create a provider talking to Ark over HTTP
    ///
    /// Uses `api_key`, `api_base` and `timeout_secs` from `config`.
    pub fn from_config(
        config: &EmbeddingConfig,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> Result<Self> {
        let transport = ArkHttpTransport::from_config(config)?;
        Self::new(config.clone(), Arc::new(transport), diagnostics)
    }

    /// Effective configuration after normalization
    pub fn config(&self) -> &EmbeddingConfig {
        &self.config
    }

    /// Configured number of inputs per request
    pub fn chunk_size(&self) -> usize {
        self.config.chunk_size
    }

    /// Sink receiving this provider's warnings
    pub fn diagnostics(&self) -> &Arc<dyn DiagnosticSink> {
        &self.diagnostics
    }

    /// Embed a mixed sequence of text and image items
    ///
    /// `chunk_size` overrides the configured number of inputs per request.
    /// A zero override is rejected even for an empty sequence; otherwise an
    /// empty sequence yields an empty result without a remote call.
    pub async fn embed_inputs(
        &self,
        items: &[EmbeddingInput],
        chunk_size: Option<usize>,
    ) -> Result<Vec<EmbeddingVector>> {
        let chunk_size = effective_chunk_size(self.config.chunk_size, chunk_size)?;
        if items.is_empty() {
            return Ok(Vec::new());
        }

        run_batches(self.transport.as_ref(), &self.config.model, items, chunk_size).await
    }
}

#[async_trait]
impl EmbeddingProvider for ArkEmbeddingProvider {
    async fn embed_text(&self, texts: &[String]) -> Result<Vec<EmbeddingVector>> {
        let items: Vec<EmbeddingInput> = texts.iter().map(EmbeddingInput::text).collect();
        self.embed_inputs(&items, None).await
    }

    async fn embed_images(
        &self,
        urls: &[String],
        chunk_size: Option<usize>,
    ) -> Result<Vec<EmbeddingVector>> {
        let items: Vec<EmbeddingInput> = urls.iter().map(EmbeddingInput::image_url).collect();
        self.embed_inputs(&items, chunk_size).await
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    fn provider_name(&self) -> &str {
        ARK_PROVIDER_NAME
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use mme_domain::registry::{EMBEDDING_PROVIDERS, EmbeddingProviderEntry};

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static ARK_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: ARK_PROVIDER_NAME,
    description: "Volcengine Ark multimodal embedding provider (doubao-embedding-vision)",
    factory: ark_factory,
};

fn ark_factory(
    config: &EmbeddingConfig,
    diagnostics: Arc<dyn DiagnosticSink>,
) -> Result<Arc<dyn EmbeddingProvider>> {
    let provider: Arc<dyn EmbeddingProvider> =
        Arc::new(ArkEmbeddingProvider::from_config(config, diagnostics)?);
    Ok(provider)
}
