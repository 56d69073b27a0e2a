//! Messages emitted by failing rules.

use crate::core::types::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable `(text, severity)` pair.
///
/// A rule owns one message as its template; every failure appends a fresh
/// copy to the field that evaluated it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    text: String,
    severity: Severity,
}

impl Message {
    /// Create a new message.
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }

    /// Create an info message.
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Info)
    }

    /// Create a success message.
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Success)
    }

    /// Create a warning message.
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Warning)
    }

    /// Create an error message.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Error)
    }

    /// Message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Message severity.
    pub fn severity(&self) -> Severity {
        self.severity
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.text)
    }
}
