use serde::{Deserialize, Serialize};

/// Error type produced by external markdown renderers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while rendering a deck.
///
/// Splitting itself never fails; annotation problems degrade to
/// [`Diagnostic`]s. A renderer failure for any one slide fails the whole
/// transform, with the renderer's error preserved as the source.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to render slide {index} <{tag_name}>")]
    Slide {
        /// Zero-based position of the slide in the deck.
        index: usize,
        tag_name: String,
        #[source]
        source: BoxError,
    },
}

/// A diagnostic message produced while splitting.
///
/// Diagnostics are non-fatal: the splitter continues and produces a complete
/// deck even when diagnostics are emitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// 1-based line number, when the problem is tied to a specific line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>, line: usize) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            line: Some(line),
        }
    }
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}
