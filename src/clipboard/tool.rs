//! CopyTool trait and the process-backed implementation.

use std::io::Write;
use std::process::{Child, Command, Stdio};

use super::result::CopyMethod;

/// A tool that can copy text to the system clipboard.
pub trait CopyTool: Send + Sync {
    /// The method identifier for this tool.
    fn method(&self) -> CopyMethod;

    /// Human-readable name for error messages.
    fn name(&self) -> &'static str {
        self.method().name()
    }

    /// Check if this tool is available on the system.
    ///
    /// Should be fast - typically checks if the binary exists.
    fn is_available(&self) -> bool;

    /// Try to copy text content to the clipboard.
    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError>;
}

/// Error from a specific tool operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyToolError {
    /// Tool execution failed
    Failed(String),
    /// Tool not found on system
    NotFound,
}

/// Clipboard tool driven by an external command that reads stdin.
pub struct PipeTool {
    method: CopyMethod,
}

impl PipeTool {
    pub fn new(method: CopyMethod) -> Self {
        Self { method }
    }

    /// Check if the binary is on PATH.
    fn tool_exists(&self) -> bool {
        Command::new("which")
            .arg(self.method.name())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

impl CopyTool for PipeTool {
    fn method(&self) -> CopyMethod {
        self.method
    }

    fn is_available(&self) -> bool {
        self.method.supported_here() && self.tool_exists()
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        let mut child = Command::new(self.method.name())
            .args(self.method.args())
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => CopyToolError::NotFound,
                _ => CopyToolError::Failed(e.to_string()),
            })?;

        feed_and_wait(self.method.name(), &mut child, text)
    }
}

/// Write `text` to the child's stdin, close it, and reap the child.
///
/// A failed write kills the child so it is never left running or unreaped.
fn feed_and_wait(name: &str, child: &mut Child, text: &str) -> Result<(), CopyToolError> {
    // Dropping stdin before waiting lets the tool see EOF.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };

    if let Err(e) = written {
        let _ = child.kill();
        let _ = child.wait();
        return Err(CopyToolError::Failed(format!("{}: {}", name, e)));
    }

    let status = child
        .wait()
        .map_err(|e| CopyToolError::Failed(e.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(CopyToolError::Failed(format!("{} exited with {}", name, status)))
    }
}

/// Get the platform-appropriate tools in priority order.
pub fn platform_tools() -> Vec<Box<dyn CopyTool>> {
    #[cfg(target_os = "macos")]
    {
        vec![Box::new(PipeTool::new(CopyMethod::Pbcopy))]
    }

    #[cfg(target_os = "linux")]
    {
        vec![
            Box::new(PipeTool::new(CopyMethod::WlCopy)),
            Box::new(PipeTool::new(CopyMethod::Xclip)),
            Box::new(PipeTool::new(CopyMethod::Xsel)),
        ]
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        vec![]
    }
}
