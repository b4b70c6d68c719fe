//! Emoji interleaving.
//!
//! Walks the words of a text and appends an emoji after every `interval`-th
//! countable word. Whitespace runs are kept byte for byte. URL tokens neither
//! count nor receive an emoji.

use rand::Rng;
use regex::Regex;

use once_cell::sync::Lazy;

use super::catalog::emoji_pool;
use super::url::is_url_token;

/// Extra draws allowed when the pick repeats the previous emoji.
pub const MAX_REPEAT_RETRIES: usize = 5;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Insert emoji after every `interval`-th countable word.
///
/// `interval == 0` disables the stage. After each insertion the next
/// threshold moves forward by exactly `interval` words.
pub fn interleave<R: Rng + ?Sized>(text: &str, interval: usize, rng: &mut R) -> String {
    interleave_from(text, interval, emoji_pool(), rng)
}

/// [`interleave`] drawing from an explicit pool.
pub fn interleave_from<R: Rng + ?Sized>(
    text: &str,
    interval: usize,
    pool: &[&str],
    rng: &mut R,
) -> String {
    if interval == 0 || pool.is_empty() {
        return text.to_string();
    }

    let mut tokens = tokenize(text);
    let mut word_count = 0;
    let mut next_threshold = interval;
    let mut last: Option<&str> = None;

    for token in tokens.iter_mut() {
        if token.trim().is_empty() || is_url_token(token) {
            continue;
        }
        word_count += 1;
        if word_count < next_threshold {
            continue;
        }

        let emoji = pick_emoji(pool, last, rng);
        if !token.ends_with(char::is_whitespace) {
            token.push(' ');
        }
        token.push_str(emoji);
        next_threshold += interval;
        last = Some(emoji);
    }

    tokens.concat()
}

/// Split into alternating word and whitespace tokens.
///
/// Concatenating the tokens reproduces `text` exactly.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    for ws in WHITESPACE_RUN.find_iter(text) {
        if ws.start() > cursor {
            tokens.push(text[cursor..ws.start()].to_string());
        }
        tokens.push(ws.as_str().to_string());
        cursor = ws.end();
    }
    if cursor < text.len() {
        tokens.push(text[cursor..].to_string());
    }

    tokens
}

/// Draw from `pool`, retrying a bounded number of times to avoid `last`.
fn pick_emoji<'a, R: Rng + ?Sized>(pool: &[&'a str], last: Option<&str>, rng: &mut R) -> &'a str {
    let mut choice = pool[rng.gen_range(0..pool.len())];
    let mut retries = 0;
    while Some(choice) == last && retries < MAX_REPEAT_RETRIES {
        choice = pool[rng.gen_range(0..pool.len())];
        retries += 1;
    }
    choice
}
