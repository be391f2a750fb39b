//! Structured diagnostic messages with severity and optional detail text.

use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// A diagnostic reported by an upstream producer (a linter, a compiler,
/// a language server).
///
/// Both `message` and `detail` are markdown source; they are converted to
/// styled text at render time, not here. The struct is plain data: renderers
/// borrow it read-only for a single pass and nothing in this crate validates
/// it. An empty message renders as empty content rather than being an error.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic, driving icon selection.
    pub severity: Severity,
    /// The main diagnostic message, markdown-formatted.
    pub message: String,
    /// Supplementary markdown shown de-emphasized below the message.
    ///
    /// `None` suppresses the detail block entirely. `Some("")` counts as
    /// present and renders an empty block.
    pub detail: Option<String>,
}

impl Diagnostic {
    /// Creates a new diagnostic with the given severity and message.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            detail: None,
        }
    }

    /// Creates a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Creates a new warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Creates a new informational diagnostic.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Creates a new hint diagnostic.
    pub fn hint(message: impl Into<String>) -> Self {
        Self::new(Severity::Hint, message)
    }

    /// Sets the detail text for this diagnostic.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}
