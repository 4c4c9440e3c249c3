//! Configuration management
//!
//! Layered configuration: defaults, an optional TOML file, then
//! `MME__`-prefixed environment variables.
//!
//! ```toml
//! [logging]
//! level = "debug"
//!
//! [embedding]
//! provider = "ark"
//! api_key = "ak-..."
//! chunk_size = 4
//! ```

mod app;
mod loader;
mod logging;

pub use app::AppConfig;
pub use loader::{ConfigBuilder, ConfigLoader, validate_app_config};
pub use logging::LoggingConfig;
