//! Non-fatal diagnostics surfaced during provider construction

use std::fmt;

use serde::{Deserialize, Serialize};

/// A configuration option that was dropped or rewritten
///
/// Execution continues with the corrected configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationWarning {
    /// Provider that emitted the warning
    pub provider: String,
    /// Configuration key affected
    pub option: String,
    /// Human-readable explanation
    pub message: String,
}

impl ConfigurationWarning {
    /// Create a new warning
    pub fn new(
        provider: impl Into<String>,
        option: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            provider: provider.into(),
            option: option.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigurationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.provider, self.option, self.message)
    }
}
