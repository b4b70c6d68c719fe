//! Session controller.
//!
//! Owns everything the interactive front ends need between transforms: the
//! active mode, slider values, text per mode, theme and the last result.
//! State is read from the [`StateStore`] on creation, falling back to the
//! config defaults, and written back by [`Session::persist`].

use rand::Rng;
use rand_chacha::ChaCha20Rng;

use crate::clipboard::{ClipboardError, Copy, CopyResult};
use crate::config::Config;
use crate::pipeline::homoglyph::MAX_PERCENT;
use crate::pipeline::{Mode, Pipeline, TransformError, TransformRequest};
use crate::store::{keys, StateStore, StoreError};
use crate::theme::ThemeName;

/// Largest interval reachable by stepping the slider.
pub const MAX_SLIDER_INTERVAL: usize = 20;

/// Errors from session actions other than transforming.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Nothing to copy yet - generate a result first")]
    NothingToCopy,

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Controller state for one interactive session.
pub struct Session<R = ChaCha20Rng> {
    pipeline: Pipeline<R>,
    store: StateStore,
    mode: Mode,
    percent: u8,
    interval: usize,
    simple_text: String,
    advanced_text: String,
    theme: ThemeName,
    last_result: Option<String>,
}

impl Session<ChaCha20Rng> {
    /// Session with an OS-seeded pipeline.
    pub fn new(config: &Config, store: StateStore) -> Self {
        Self::with_pipeline(config, store, Pipeline::from_entropy())
    }
}

impl<R: Rng> Session<R> {
    /// Session with a caller-provided pipeline.
    ///
    /// Saved values win over config defaults; missing keys fall back.
    pub fn with_pipeline(config: &Config, store: StateStore, pipeline: Pipeline<R>) -> Self {
        let mode = store.get(keys::MODE).unwrap_or(config.defaults.mode);
        let percent = store
            .get::<u8>(keys::PERCENT)
            .unwrap_or(config.defaults.percent)
            .min(MAX_PERCENT);
        let interval = store.get(keys::INTERVAL).unwrap_or(config.defaults.interval);
        let theme = store.get(keys::THEME).unwrap_or(config.ui.theme);
        let simple_text = store.get::<String>(keys::TEXT_SIMPLE).unwrap_or_default();
        let advanced_text = store.get::<String>(keys::TEXT_ADVANCED).unwrap_or_default();

        Self {
            pipeline,
            store,
            mode,
            percent,
            interval,
            simple_text,
            advanced_text,
            theme,
            last_result: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Switch between the simple and advanced tabs.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Set the substitution percentage, clamped to `0..=100`.
    pub fn set_percent(&mut self, percent: u8) {
        self.percent = percent.min(MAX_PERCENT);
    }

    /// Step the percentage, saturating at both ends.
    pub fn adjust_percent(&mut self, delta: i16) {
        let next = (i16::from(self.percent) + delta).clamp(0, i16::from(MAX_PERCENT));
        self.percent = next as u8;
    }

    pub fn interval(&self) -> usize {
        self.interval
    }

    pub fn set_interval(&mut self, interval: usize) {
        self.interval = interval;
    }

    /// Step the interval within `0..=MAX_SLIDER_INTERVAL`.
    pub fn adjust_interval(&mut self, delta: isize) {
        let next = if delta.is_negative() {
            self.interval.saturating_sub(delta.unsigned_abs())
        } else {
            self.interval.saturating_add(delta.unsigned_abs())
        };
        self.interval = next.min(MAX_SLIDER_INTERVAL.max(self.interval));
    }

    pub fn theme(&self) -> ThemeName {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Text entered for `mode`.
    pub fn text(&self, mode: Mode) -> &str {
        match mode {
            Mode::Simple => &self.simple_text,
            Mode::Advanced => &self.advanced_text,
        }
    }

    /// Text of the active tab.
    pub fn current_text(&self) -> &str {
        self.text(self.mode)
    }

    /// Mutable text of the active tab.
    pub fn current_text_mut(&mut self) -> &mut String {
        match self.mode {
            Mode::Simple => &mut self.simple_text,
            Mode::Advanced => &mut self.advanced_text,
        }
    }

    pub fn set_text(&mut self, mode: Mode, text: impl Into<String>) {
        match mode {
            Mode::Simple => self.simple_text = text.into(),
            Mode::Advanced => self.advanced_text = text.into(),
        }
    }

    /// Request for the active tab and current slider values.
    pub fn request(&self) -> TransformRequest {
        TransformRequest::new(self.current_text())
            .with_percent(self.percent)
            .with_interval(self.interval)
            .with_mode(self.mode)
    }

    /// Transform the active tab's text.
    ///
    /// Success replaces the last result. Failure leaves it untouched.
    pub fn generate(&mut self) -> Result<&str, TransformError> {
        let request = self.request();
        match self.pipeline.transform(&request) {
            Ok(output) => Ok(self.last_result.insert(output).as_str()),
            Err(e) => {
                tracing::info!(error = %e, "transform rejected");
                Err(e)
            }
        }
    }

    /// Most recent successful result.
    pub fn last_result(&self) -> Option<&str> {
        self.last_result.as_deref()
    }

    /// Copy the last result with `copy`.
    pub fn copy_last(&self, copy: &Copy) -> Result<CopyResult, SessionError> {
        let text = self.last_result().ok_or(SessionError::NothingToCopy)?;
        Ok(copy.text(text)?)
    }

    /// Write mode, sliders, texts and theme to the store and save it.
    pub fn persist(&mut self) -> Result<(), StoreError> {
        self.store.set(keys::MODE, self.mode)?;
        self.store.set(keys::PERCENT, self.percent)?;
        self.store.set(keys::INTERVAL, self.interval)?;
        self.store.set(keys::THEME, self.theme)?;
        self.store.set(keys::TEXT_SIMPLE, &self.simple_text)?;
        self.store.set(keys::TEXT_ADVANCED, &self.advanced_text)?;
        self.store.save()
    }
}
