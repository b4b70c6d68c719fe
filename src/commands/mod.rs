//! Subcommand handlers.
//!
//! Each handler returns `anyhow::Result`; `main` prints the error and sets
//! the exit code.

pub mod completions;
pub mod config;
pub mod run;
pub mod ui;

use tmix::theme::Theme;
use tmix::Config;

/// Theme for CLI output. Falls back to the default when the config is unreadable.
pub fn cli_theme() -> Theme {
    Config::load()
        .map(|config| Theme::named(config.ui.theme))
        .unwrap_or_default()
}
