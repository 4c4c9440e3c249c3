//! Application configuration root

use mme_domain::value_objects::EmbeddingConfig;
use serde::{Deserialize, Serialize};

use super::LoggingConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Embedding provider configuration
    pub embedding: EmbeddingConfig,
}
