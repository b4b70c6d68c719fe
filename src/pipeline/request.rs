//! Input parameters for one pipeline run.

use serde::{Deserialize, Serialize};

use super::homoglyph::MAX_PERCENT;

/// Which tab the text was entered in.
///
/// Template expansion only runs in [`Mode::Advanced`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Simple,
    Advanced,
}

impl Mode {
    /// Lowercase name used in config and state files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Simple => "simple",
            Mode::Advanced => "advanced",
        }
    }

    /// Display label for tab bars.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Simple => "Simple",
            Mode::Advanced => "Advanced",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Mode::Simple => Mode::Advanced,
            Mode::Advanced => Mode::Simple,
        }
    }

    /// Whether template groups are expanded in this mode.
    pub fn expands_templates(&self) -> bool {
        matches!(self, Mode::Advanced)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(Mode::Simple),
            "advanced" => Ok(Mode::Advanced),
            other => Err(format!("unknown mode '{}' (expected simple or advanced)", other)),
        }
    }
}

/// Everything one `transform` call needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformRequest {
    /// Raw text as entered. Trimmed during validation.
    pub text: String,
    /// Chance of substituting each covered character, `0..=100`.
    pub percent: u8,
    /// Words between emoji; `0` disables interleaving.
    pub interval: usize,
    /// Whether template expansion applies.
    pub mode: Mode,
}

impl TransformRequest {
    /// Create a request in simple mode with both stages disabled.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            percent: 0,
            interval: 0,
            mode: Mode::Simple,
        }
    }

    /// Set the substitution percentage, clamped to `0..=100`.
    pub fn with_percent(mut self, percent: u8) -> Self {
        self.percent = percent.min(MAX_PERCENT);
        self
    }

    /// Set the emoji interval.
    pub fn with_interval(mut self, interval: usize) -> Self {
        self.interval = interval;
        self
    }

    /// Set the mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_default_is_simple() {
        assert_eq!(Mode::default(), Mode::Simple);
    }

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("Advanced".parse::<Mode>(), Ok(Mode::Advanced));
        assert_eq!(" simple ".parse::<Mode>(), Ok(Mode::Simple));
        assert!("expert".parse::<Mode>().is_err());
    }

    #[test]
    fn mode_toggles() {
        assert_eq!(Mode::Simple.toggled(), Mode::Advanced);
        assert_eq!(Mode::Advanced.toggled(), Mode::Simple);
    }

    #[test]
    fn only_advanced_expands_templates() {
        assert!(Mode::Advanced.expands_templates());
        assert!(!Mode::Simple.expands_templates());
    }

    #[test]
    fn builder_clamps_percent() {
        let request = TransformRequest::new("x").with_percent(180);
        assert_eq!(request.percent, 100);
    }

    #[test]
    fn new_request_disables_stages() {
        let request = TransformRequest::new("hello");
        assert_eq!(request.percent, 0);
        assert_eq!(request.interval, 0);
        assert_eq!(request.mode, Mode::Simple);
    }

    #[test]
    fn mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Mode::Advanced).unwrap(), "\"advanced\"");
    }
}
