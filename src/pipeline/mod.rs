//! Text transformation pipeline.
//!
//! Raw text flows through three independent stages:
//!
//! 1. [`expand`] resolves `[a|b|c]` template groups (advanced mode only)
//! 2. [`randomize`] swaps Cyrillic letters for Latin look-alikes
//! 3. [`interleave`] drops emoji between words
//!
//! The interleaver must run last: it changes word boundaries that the
//! randomizer should never see.
//!
//! Every stage takes its random source as a parameter. Production code uses
//! [`Pipeline`], which owns a ChaCha generator seeded from the OS or from a
//! fixed seed. Tests pass `StepRng` or a seeded generator directly.
//!
//! # Module Structure
//!
//! - [`catalog`] - Substitution table and emoji catalog
//! - [`expand`] - Template expander
//! - [`homoglyph`] - Homoglyph randomizer
//! - [`emoji`] - Emoji interleaver
//! - [`request`] - Request parameters and mode
//! - [`error`] - Error type

pub mod catalog;
pub mod emoji;
pub mod error;
pub mod expand;
pub mod homoglyph;
pub mod request;
mod url;

use std::panic::{self, AssertUnwindSafe};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

pub use emoji::interleave;
pub use error::TransformError;
pub use expand::expand;
pub use homoglyph::randomize;
pub use request::{Mode, TransformRequest};

/// Longest accepted input, in characters, after trimming.
pub const MAX_INPUT_CHARS: usize = 2000;

/// Trim `text` and check it against the length limits.
///
/// Returns the trimmed slice on success.
pub fn validate(text: &str) -> Result<&str, TransformError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TransformError::EmptyInput);
    }
    let length = trimmed.chars().count();
    if length > MAX_INPUT_CHARS {
        return Err(TransformError::InputTooLong {
            length,
            max: MAX_INPUT_CHARS,
        });
    }
    Ok(trimmed)
}

/// Run the full pipeline for one request.
///
/// Validation errors are returned before any stage runs. A panic inside a
/// stage is logged and surfaces as [`TransformError::Failed`]; no partial
/// output is ever returned.
pub fn transform<R: Rng + ?Sized>(
    request: &TransformRequest,
    rng: &mut R,
) -> Result<String, TransformError> {
    let text = validate(&request.text)?;

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| run_stages(text, request, rng)));

    outcome.map_err(|payload| {
        tracing::error!(cause = %panic_message(payload.as_ref()), "transformation failed");
        TransformError::Failed
    })
}

fn run_stages<R: Rng + ?Sized>(text: &str, request: &TransformRequest, rng: &mut R) -> String {
    let expanded = if request.mode.expands_templates() {
        let out = expand(text, rng);
        tracing::debug!(groups = expand::count_groups(text), "expanded templates");
        out
    } else {
        text.to_string()
    };

    let randomized = randomize(&expanded, request.percent, rng);
    let output = interleave(&randomized, request.interval, rng);

    tracing::debug!(
        mode = %request.mode,
        percent = request.percent,
        interval = request.interval,
        input_chars = text.chars().count(),
        output_chars = output.chars().count(),
        "transformed text"
    );
    output
}

/// Best-effort text of a panic payload.
pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Pipeline bound to its own random source.
pub struct Pipeline<R = ChaCha20Rng> {
    rng: R,
}

impl Pipeline<ChaCha20Rng> {
    /// Seed from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::with_rng(ChaCha20Rng::from_entropy())
    }

    /// Seed deterministically; the same seed and request give the same output.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Pipeline<R> {
    /// Use a caller-provided random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Run one request. See [`transform`].
    pub fn transform(&mut self, request: &TransformRequest) -> Result<String, TransformError> {
        transform(request, &mut self.rng)
    }
}

impl Default for Pipeline<ChaCha20Rng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}
