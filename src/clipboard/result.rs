//! Copy operation results and method identifiers.

/// The result of a successful clipboard copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyResult {
    /// Tool that accepted the text
    pub method: CopyMethod,
    /// Characters handed to the tool
    pub chars: usize,
}

impl CopyResult {
    pub fn new(method: CopyMethod, chars: usize) -> Self {
        Self { method, chars }
    }

    /// User-friendly message describing what happened.
    pub fn message(&self) -> String {
        format!(
            "Copied {} characters to clipboard ({})",
            self.chars,
            self.method.name()
        )
    }
}

/// Which tool was used for the copy operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    /// macOS pasteboard
    Pbcopy,
    /// Linux Wayland
    WlCopy,
    /// Linux X11
    Xclip,
    /// Linux X11 alternative
    Xsel,
}

impl CopyMethod {
    /// Tool name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pbcopy => "pbcopy",
            Self::WlCopy => "wl-copy",
            Self::Xclip => "xclip",
            Self::Xsel => "xsel",
        }
    }

    /// Arguments that make the tool read the clipboard contents from stdin.
    pub fn args(&self) -> &'static [&'static str] {
        match self {
            Self::Pbcopy | Self::WlCopy => &[],
            Self::Xclip => &["-selection", "clipboard"],
            Self::Xsel => &["--clipboard", "--input"],
        }
    }

    /// Whether the tool can work on this platform at all.
    pub fn supported_here(&self) -> bool {
        match self {
            Self::Pbcopy => cfg!(target_os = "macos"),
            Self::WlCopy | Self::Xclip | Self::Xsel => cfg!(target_os = "linux"),
        }
    }
}
