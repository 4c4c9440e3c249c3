//! Configuration Value Objects
//!
//! Configuration for one embedding provider instance, plus the
//! construction-time policy that adapts it to what the provider supports.

use serde::{Deserialize, Serialize};

use crate::constants::{ARK_PROVIDER_NAME, DEFAULT_CHUNK_SIZE, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::error::{Error, Result};
use crate::ports::DiagnosticSink;
use crate::value_objects::ConfigurationWarning;

/// Value Object: Embedding Provider Configuration
///
/// Normalized once by [`EmbeddingConfig::normalize_for`] when a provider is
/// constructed and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Registry name of the provider (ark, null)
    pub provider: String,
    /// Model identifier; empty means the provider default
    pub model: String,
    /// Maximum number of inputs per remote request
    pub chunk_size: usize,
    /// Requested output dimensions, cleared for providers that ignore it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<usize>,
    /// API key for the remote service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Custom API base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: ARK_PROVIDER_NAME.to_string(),
            model: String::new(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            dimensions: None,
            api_key: None,
            api_base: None,
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl EmbeddingConfig {
    /// Create a config for the given provider with defaults elsewhere
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the chunk size
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the requested dimensions
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the API base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Apply a provider's construction-time policy
    ///
    /// - rejects a zero chunk size
    /// - drops `dimensions` when the provider decides vector length itself,
    ///   sending exactly one [`ConfigurationWarning`] to `sink`
    /// - fills an empty model with the provider default
    pub fn normalize_for(
        mut self,
        capabilities: &ProviderCapabilities,
        sink: &dyn DiagnosticSink,
    ) -> Result<Self> {
        if self.chunk_size == 0 {
            return Err(Error::configuration(format!(
                "{} chunk_size must be greater than 0",
                capabilities.name
            )));
        }

        if let Some(requested) = self.dimensions {
            if !capabilities.supports_custom_dimensions {
                sink.warn(&ConfigurationWarning::new(
                    capabilities.name,
                    "dimensions",
                    format!(
                        "{} does not support specifying embedding dimensions \
                         (requested {requested}); the model determines vector length, \
                         dimensions will be unset",
                        capabilities.name
                    ),
                ));
                self.dimensions = None;
            }
        }

        if self.model.trim().is_empty() {
            self.model = capabilities.default_model.to_string();
        }

        Ok(self)
    }
}

/// Value Object: what a provider honors at construction time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderCapabilities {
    /// Provider name used in diagnostics
    pub name: &'static str,
    /// Model used when none is configured
    pub default_model: &'static str,
    /// Whether the provider can shorten or lengthen its output vectors
    pub supports_custom_dimensions: bool,
}
