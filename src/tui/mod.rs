//! TUI (Text User Interface) module for tmix
//!
//! Full-screen terminal interface built on ratatui/crossterm: tabs for simple
//! and advanced mode, sliders, a result pane and clipboard copy.

pub mod app;
pub mod randomizer_app;
pub mod ui;

pub use app::{App, KeyResult};
pub use randomizer_app::{RandomizerApp, RandomizerScreen};
pub use ui::Status;
