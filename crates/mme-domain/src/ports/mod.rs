//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and the outer layers.
//!
//! ## Organization
//!
//! - **providers/** - the uniform embedding interface and the remote transport it sits on
//! - **infrastructure/** - cross-cutting services owned by an adapter instance (diagnostics)

/// Infrastructure service ports
pub mod infrastructure;
/// External service provider ports
pub mod providers;

pub use infrastructure::DiagnosticSink;
pub use providers::{EmbeddingProvider, MultimodalEmbeddingTransport};
