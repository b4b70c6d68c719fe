//! Copy orchestrator for clipboard operations.

use super::error::ClipboardError;
use super::result::CopyResult;
use super::tool::{platform_tools, CopyTool, CopyToolError};

/// Orchestrates clipboard copy operations using available tools.
///
/// Tries tools in priority order and returns on the first success.
pub struct Copy {
    tools: Vec<Box<dyn CopyTool>>,
}

impl Copy {
    /// Create with platform-appropriate tools.
    pub fn new() -> Self {
        Self {
            tools: platform_tools(),
        }
    }

    /// Create with specific tools (for testing).
    pub fn with_tools(tools: Vec<Box<dyn CopyTool>>) -> Self {
        Self { tools }
    }

    /// Copy text to the clipboard.
    ///
    /// Reports the last tool failure if every available tool failed, or
    /// [`ClipboardError::NoToolAvailable`] if none could run.
    pub fn text(&self, text: &str) -> Result<CopyResult, ClipboardError> {
        if text.is_empty() {
            return Err(ClipboardError::EmptyText);
        }

        let mut last_failure = None;
        for tool in &self.tools {
            if !tool.is_available() {
                continue;
            }
            match tool.try_copy_text(text) {
                Ok(()) => {
                    tracing::debug!(tool = tool.name(), "copied text to clipboard");
                    return Ok(CopyResult::new(tool.method(), text.chars().count()));
                }
                Err(CopyToolError::NotFound) => continue,
                Err(CopyToolError::Failed(message)) => {
                    tracing::warn!(tool = tool.name(), %message, "clipboard tool failed");
                    last_failure = Some(ClipboardError::ToolFailed {
                        tool: tool.name(),
                        message,
                    });
                }
            }
        }

        Err(last_failure.unwrap_or(ClipboardError::NoToolAvailable))
    }
}

impl Default for Copy {
    fn default() -> Self {
        Self::new()
    }
}
