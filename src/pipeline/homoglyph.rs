//! Homoglyph randomizer.
//!
//! Each covered character is independently swapped for a look-alike with
//! probability `percent`%. URLs are copied through untouched so links keep
//! working. The mapping is one character to one character, so the output
//! always has the same character count as the input.

use rand::Rng;

use super::catalog::alternatives;
use super::url::URL_SPAN;

/// Upper bound of the substitution percentage.
pub const MAX_PERCENT: u8 = 100;

/// Substitute look-alike characters in `text`.
///
/// `percent` is clamped to `0..=100`. `0` returns the input unchanged without
/// touching the random source.
pub fn randomize<R: Rng + ?Sized>(text: &str, percent: u8, rng: &mut R) -> String {
    if percent == 0 {
        return text.to_string();
    }
    let percent = f64::from(percent.min(MAX_PERCENT));

    let mut result = String::with_capacity(text.len());
    let mut cursor = 0;

    for url in URL_SPAN.find_iter(text) {
        substitute_span(&text[cursor..url.start()], percent, rng, &mut result);
        result.push_str(url.as_str());
        cursor = url.end();
    }
    substitute_span(&text[cursor..], percent, rng, &mut result);

    result
}

/// Run substitution over a URL-free span, appending to `out`.
fn substitute_span<R: Rng + ?Sized>(span: &str, percent: f64, rng: &mut R, out: &mut String) {
    for c in span.chars() {
        match alternatives(c) {
            Some(alts) => {
                let draw: f64 = rng.gen_range(0.0..100.0);
                if draw > percent {
                    out.push(c);
                } else {
                    out.push(pick_replacement(c, alts, rng));
                }
            }
            None => out.push(c),
        }
    }
}

/// Choose a replacement, preferring anything other than the original.
fn pick_replacement<R: Rng + ?Sized>(original: char, alts: &[char], rng: &mut R) -> char {
    let others: Vec<char> = alts.iter().copied().filter(|&a| a != original).collect();
    let pool: &[char] = if others.is_empty() { alts } else { &others };
    match pool.len() {
        0 => original,
        1 => pool[0],
        n => pool[rng.gen_range(0..n)],
    }
}
