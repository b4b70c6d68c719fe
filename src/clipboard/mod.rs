//! System clipboard access.
//!
//! Copying is delegated to the platform's command-line tools: `pbcopy` on
//! macOS, and `wl-copy`, `xclip` or `xsel` on Linux. Failures are advisory;
//! callers report them and carry on.

mod copy;
mod error;
mod result;
mod tool;

pub use copy::Copy;
pub use error::ClipboardError;
pub use result::{CopyMethod, CopyResult};
pub use tool::{platform_tools, CopyTool, CopyToolError, PipeTool};
