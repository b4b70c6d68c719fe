//! Template expansion: `[a|b|c]` groups resolve to one random variant.
//!
//! Groups are single-level. There is no escape for literal brackets, so
//! `[not a template]` is treated as a one-variant group and loses its brackets.

use once_cell::sync::Lazy;
use rand::Rng;
use regex::{Captures, Regex};

/// Opening bracket, one or more non-bracket characters, closing bracket.
static TEMPLATE_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]+)\]").expect("template group pattern is valid"));

/// Replace every template group in `text` with one of its variants.
///
/// Variants are split on `|` and trimmed. Empty ones are dropped. A group
/// with no non-empty variant is left as written.
pub fn expand<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    TEMPLATE_GROUP
        .replace_all(text, |caps: &Captures| {
            let variants: Vec<&str> = caps[1]
                .split('|')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .collect();

            if variants.is_empty() {
                return caps[0].to_string();
            }
            variants[rng.gen_range(0..variants.len())].to_string()
        })
        .into_owned()
}

/// Count the template groups in `text`.
pub fn count_groups(text: &str) -> usize {
    TEMPLATE_GROUP.find_iter(text).count()
}
