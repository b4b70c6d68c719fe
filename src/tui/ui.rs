//! Shared status line and footer rendering.
//!
//! Provides rendering functions for the status bar (last action outcome)
//! and the footer bar (keybinding hints).

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

/// Outcome of the last user action, shown in the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Success(String),
    Error(String),
}

impl Status {
    pub fn text(&self) -> &str {
        match self {
            Status::Info(s) | Status::Success(s) | Status::Error(s) => s,
        }
    }

    fn style(&self, theme: &Theme) -> Style {
        match self {
            Status::Info(_) => theme.text_secondary_style(),
            Status::Success(_) => theme.success_style(),
            Status::Error(_) => theme.error_style(),
        }
    }
}

/// Render a status line colored by outcome.
pub fn render_status_line(frame: &mut Frame, area: Rect, status: &Status, theme: &Theme) {
    let line = Paragraph::new(status.text().to_string()).style(status.style(theme));
    frame.render_widget(line, area);
}

/// Render a centered footer with keybinding hints.
///
/// Takes pairs of (key, description) and joins them with " | " separators.
/// Trailing hints that do not fit the area width are dropped.
///
/// Example: `&[("Esc", "quit"), ("F5", "generate")]` renders as
/// `"Esc: quit | F5: generate"`.
pub fn render_footer(frame: &mut Frame, area: Rect, keys: &[(&str, &str)], theme: &Theme) {
    let keys = fit_footer_keys(keys, usize::from(area.width));
    let spans: Vec<Span<'static>> = build_footer_spans(keys, theme);
    let footer = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(theme.text_secondary))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Longest prefix of `keys` whose rendered hints fit in `width` columns.
fn fit_footer_keys<'a, 'k>(keys: &'a [(&'k str, &'k str)], width: usize) -> &'a [(&'k str, &'k str)] {
    let mut used = 0;
    for (i, (key, desc)) in keys.iter().enumerate() {
        let separator = if i > 0 { " | ".width() } else { 0 };
        let entry = key.width() + ": ".width() + desc.width();
        if used + separator + entry > width {
            return &keys[..i];
        }
        used += separator + entry;
    }
    keys
}

/// Build styled spans for footer keybinding hints.
///
/// Each key is highlighted with the theme accent color, descriptions use
/// the secondary text color, and entries are separated by " | ".
fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                " | ".to_string(),
                Style::default().fg(theme.text_secondary),
            ));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(theme.accent),
        ));
        spans.push(Span::styled(
            format!(": {}", desc),
            Style::default().fg(theme.text_secondary),
        ));
    }
    spans
}
