//! Clipboard operation errors.

/// Errors that can occur during clipboard operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("Nothing to copy")]
    EmptyText,

    #[error("No clipboard tool available. On Linux, install wl-copy, xclip, or xsel.")]
    NoToolAvailable,

    #[error("Clipboard tool '{tool}' failed: {message}")]
    ToolFailed { tool: &'static str, message: String },
}
