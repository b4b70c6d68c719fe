//! Interactive randomizer screen.
//!
//! Two tabs (Simple and Advanced) share one layout: the input text, the
//! percent and interval sliders, and the last result. Key handling and
//! rendering live on [`RandomizerScreen`], which holds no terminal, so both
//! can be driven from tests. [`RandomizerApp`] adds the event loop.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph, Tabs, Wrap},
    Frame,
};
use rand_chacha::ChaCha20Rng;

use super::app::{App, KeyResult};
use super::ui::{render_footer, render_status_line, Status};
use crate::clipboard::Copy;
use crate::config::Config;
use crate::pipeline::{Mode, MAX_INPUT_CHARS};
use crate::session::{Session, SessionError};
use crate::theme::Theme;

/// Percent change per arrow key press.
const PERCENT_STEP: i16 = 5;

const FOOTER_KEYS: &[(&str, &str)] = &[
    ("Tab", "mode"),
    ("F5/^G", "generate"),
    ("←→", "percent"),
    ("↑↓", "emoji"),
    ("^Y", "copy"),
    ("^T", "theme"),
    ("Esc", "quit"),
];

/// State and behavior of the randomizer screen.
pub struct RandomizerScreen<R = ChaCha20Rng> {
    session: Session<R>,
    copy: Copy,
    theme: Theme,
    status: Status,
    copy_on_generate: bool,
}

impl<R: Rng> RandomizerScreen<R> {
    pub fn new(session: Session<R>, copy: Copy, config: &Config) -> Self {
        let theme = Theme::named(session.theme());
        Self {
            session,
            copy,
            theme,
            status: Status::Info("Type some text, then press F5 to generate".to_string()),
            copy_on_generate: config.clipboard.copy_on_generate,
        }
    }

    pub fn session(&self) -> &Session<R> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session<R> {
        &mut self.session
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Apply one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyResult {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => return KeyResult::Quit,
            KeyCode::Char('c') if ctrl => return KeyResult::Quit,
            KeyCode::Char('g') if ctrl => self.generate(),
            KeyCode::F(5) => self.generate(),
            KeyCode::Char('y') if ctrl => self.copy_result(),
            KeyCode::Char('t') if ctrl => self.toggle_theme(),
            KeyCode::Char('u') if ctrl => self.session.current_text_mut().clear(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.session.toggle_mode();
                self.status = Status::Info(format!("{} mode", self.session.mode().label()));
            }
            KeyCode::Left => self.session.adjust_percent(-PERCENT_STEP),
            KeyCode::Right => self.session.adjust_percent(PERCENT_STEP),
            KeyCode::Down => self.session.adjust_interval(-1),
            KeyCode::Up => self.session.adjust_interval(1),
            KeyCode::Backspace => {
                self.session.current_text_mut().pop();
            }
            KeyCode::Enter => self.insert_char('\n'),
            KeyCode::Char(c) if !ctrl => self.insert_char(c),
            _ => {}
        }
        KeyResult::Continue
    }

    /// Append a character unless the input is already at the length limit.
    fn insert_char(&mut self, c: char) {
        let text = self.session.current_text_mut();
        if text.chars().count() >= MAX_INPUT_CHARS {
            self.status = Status::Error(format!("Input is limited to {} characters", MAX_INPUT_CHARS));
            return;
        }
        text.push(c);
    }

    fn generate(&mut self) {
        let outcome = self.session.generate().map(|s| s.chars().count());
        self.status = match outcome {
            Ok(chars) => Status::Success(format!("Generated {} characters", chars)),
            // Input problems are a prompt to edit, not a fault.
            Err(e) if e.is_validation() => Status::Info(e.to_string()),
            Err(e) => Status::Error(e.to_string()),
        };
        if self.copy_on_generate && matches!(self.status, Status::Success(_)) {
            self.copy_result();
        }
    }

    fn copy_result(&mut self) {
        self.status = match self.session.copy_last(&self.copy) {
            Ok(result) => Status::Success(result.message()),
            Err(SessionError::NothingToCopy) => {
                Status::Info(SessionError::NothingToCopy.to_string())
            }
            Err(e) => {
                tracing::warn!(error = %e, "copy failed");
                Status::Error(format!("Copy failed: {}", e))
            }
        };
    }

    fn toggle_theme(&mut self) {
        self.session.toggle_theme();
        self.theme = Theme::named(self.session.theme());
        self.status = Status::Info(format!("{} theme", self.session.theme().as_str()));
    }

    /// Draw the whole screen.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(self.theme.base_style()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_tabs(frame, chunks[0]);
        self.render_input(frame, chunks[1]);
        self.render_sliders(frame, chunks[2]);
        self.render_output(frame, chunks[3]);
        render_status_line(frame, chunks[4], &self.status, &self.theme);
        render_footer(frame, chunks[5], FOOTER_KEYS, &self.theme);
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect) {
        let selected = match self.session.mode() {
            Mode::Simple => 0,
            Mode::Advanced => 1,
        };
        let tabs = Tabs::new(vec![Mode::Simple.label(), Mode::Advanced.label()])
            .select(selected)
            .style(self.theme.text_secondary_style())
            .highlight_style(self.theme.accent_bold_style().add_modifier(Modifier::UNDERLINED))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.text_secondary_style())
                    .title(" tmix "),
            );
        frame.render_widget(tabs, area);
    }

    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let text = self.session.current_text();
        let title = match self.session.mode() {
            Mode::Simple => format!(" Text ({}/{}) ", text.chars().count(), MAX_INPUT_CHARS),
            Mode::Advanced => format!(
                " Template ({}/{}) - [a|b] picks one ",
                text.chars().count(),
                MAX_INPUT_CHARS
            ),
        };
        let lines: Vec<Line> = text.split('\n').map(|l| Line::from(l.to_string())).collect();
        let input = Paragraph::new(lines)
            .style(self.theme.text_style())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.accent_style())
                    .title(title),
            );
        frame.render_widget(input, area);
    }

    fn render_sliders(&self, frame: &mut Frame, area: Rect) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let percent = self.session.percent();
        let homoglyphs = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" Homoglyphs "))
            .gauge_style(self.theme.accent_style())
            .percent(u16::from(percent))
            .label(format!("{}%", percent));
        frame.render_widget(homoglyphs, halves[0]);

        let interval = self.session.interval();
        let label = match interval {
            0 => "off".to_string(),
            1 => "after every word".to_string(),
            n => format!("every {} words", n),
        };
        let ratio = interval.min(crate::session::MAX_SLIDER_INTERVAL) as f64
            / crate::session::MAX_SLIDER_INTERVAL as f64;
        let emoji = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" Emoji "))
            .gauge_style(self.theme.accent_style())
            .ratio(ratio)
            .label(label);
        frame.render_widget(emoji, halves[1]);
    }

    fn render_output(&self, frame: &mut Frame, area: Rect) {
        let (content, style) = match self.session.last_result() {
            Some(result) => (result.to_string(), self.theme.text_style()),
            None => ("No result yet".to_string(), self.theme.text_secondary_style()),
        };
        let lines: Vec<Line> = content.split('\n').map(|l| Line::from(l.to_string())).collect();
        let output = Paragraph::new(lines)
            .style(style)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.text_secondary_style())
                    .title(" Result "),
            );
        frame.render_widget(output, area);
    }
}

/// Full-screen randomizer application.
pub struct RandomizerApp {
    app: App,
    screen: RandomizerScreen,
}

impl RandomizerApp {
    pub fn new(session: Session, config: &Config) -> Result<Self> {
        let app = App::new(Duration::from_millis(config.ui.tick_rate_ms))?;
        let screen = RandomizerScreen::new(session, Copy::new(), config);
        Ok(Self { app, screen })
    }

    /// Run until the user quits, then persist the session.
    ///
    /// The session is saved even when the loop ends with a terminal error.
    pub fn run(mut self) -> Result<()> {
        let outcome = self.event_loop();

        // Restore the terminal before anything can print.
        drop(self.app);
        finish_session(outcome, self.screen.session_mut())
    }

    fn event_loop(&mut self) -> Result<()> {
        loop {
            let screen = &self.screen;
            self.app.draw(|frame| screen.render(frame))?;

            if let Some(key) = self.app.next_key()? {
                if self.screen.handle_key(key) == KeyResult::Quit {
                    return Ok(());
                }
            }
        }
    }
}

/// Persist `session`, then report the loop outcome. A loop error wins over a
/// save error; the save error is still logged.
fn finish_session<R: Rng>(outcome: Result<()>, session: &mut Session<R>) -> Result<()> {
    let saved = session.persist();
    match (outcome, saved) {
        (Err(e), Err(save_error)) => {
            tracing::error!(error = %save_error, "failed to save session state");
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), saved) => Ok(saved?),
    }
}
