//! Diagnostic Sink Implementations
//!
//! | Sink | Use |
//! |------|-----|
//! | [`TracingDiagnosticSink`] | Production: forwards warnings as `tracing` events |
//! | [`MemoryDiagnosticSink`] | Tests and callers that surface warnings themselves |

use std::sync::{Mutex, PoisonError};

use mme_domain::ports::DiagnosticSink;
use mme_domain::value_objects::ConfigurationWarning;
use tracing::warn;

/// Forwards warnings to the active `tracing` subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnosticSink;

impl DiagnosticSink for TracingDiagnosticSink {
    fn warn(&self, warning: &ConfigurationWarning) {
        warn!(
            provider = %warning.provider,
            option = %warning.option,
            "{}",
            warning.message
        );
    }
}

/// Keeps every warning in memory
///
/// # Example
///
/// ```rust
/// use mme_domain::ports::DiagnosticSink;
/// use mme_domain::value_objects::ConfigurationWarning;
/// use mme_providers::diagnostics::MemoryDiagnosticSink;
///
/// let sink = MemoryDiagnosticSink::new();
/// sink.warn(&ConfigurationWarning::new("ark", "dimensions", "ignored"));
/// assert_eq!(sink.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryDiagnosticSink {
    warnings: Mutex<Vec<ConfigurationWarning>>,
}

impl MemoryDiagnosticSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the warnings recorded so far
    pub fn warnings(&self) -> Vec<ConfigurationWarning> {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of warnings recorded
    pub fn len(&self) -> usize {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for MemoryDiagnosticSink {
    fn warn(&self, warning: &ConfigurationWarning) {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(warning.clone());
    }
}
