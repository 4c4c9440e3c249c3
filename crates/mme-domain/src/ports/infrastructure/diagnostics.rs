use crate::value_objects::ConfigurationWarning;

/// Receiver of non-fatal diagnostics
///
/// Each adapter instance owns its sink, so warnings never depend on
/// process-wide logging state. Implementations must be `Send + Sync` because
/// providers are shared across tasks.
pub trait DiagnosticSink: Send + Sync {
    /// Record a configuration warning
    fn warn(&self, warning: &ConfigurationWarning);
}
