//! Infrastructure service ports

/// Diagnostic sink for non-fatal warnings
pub mod diagnostics;

pub use diagnostics::DiagnosticSink;
