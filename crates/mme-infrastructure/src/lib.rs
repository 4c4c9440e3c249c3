//! # Multimodal Embeddings - Infrastructure Layer
//!
//! Cross-cutting concerns around the embedding providers.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration loading, validation and saving |
//! | [`logging`] | `tracing-subscriber` setup |
//! | [`error_ext`] | Context helpers converting foreign errors into domain errors |
//! | [`bootstrap`] | Builds the configured embedding provider |
//!
//! ## Usage
//!
//! ```ignore
//! use mme_infrastructure::bootstrap::create_embedding_provider;
//! use mme_infrastructure::config::ConfigLoader;
//! use mme_infrastructure::logging::init_logging;
//!
//! let config = ConfigLoader::new().load()?;
//! init_logging(config.logging.clone())?;
//! let provider = create_embedding_provider(&config)?;
//! let vectors = provider.embed_text(&["hello".to_string()]).await?;
//! ```

/// Provider bootstrap
pub mod bootstrap;
/// Configuration management
pub mod config;
/// Infrastructure constants
pub mod constants;
/// Error context extensions
pub mod error_ext;
/// Structured logging
pub mod logging;

pub use bootstrap::create_embedding_provider;
pub use config::{AppConfig, ConfigBuilder, ConfigLoader, LoggingConfig};
