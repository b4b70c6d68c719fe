//! Static lookup data for the pipeline: the homoglyph table and the emoji catalog.

use once_cell::sync::Lazy;

/// Cyrillic letters and the characters that render the same way.
///
/// Each entry lists the original character first, so picking index 0 is
/// always a valid no-op. Uppercase forms map to plain Latin capitals;
/// lowercase forms without a Latin twin map to small capitals.
const SUBSTITUTIONS: &[(char, &[char])] = &[
    ('а', &['а', 'a']),
    ('е', &['е', 'e']),
    ('о', &['о', 'o']),
    ('р', &['р', 'p']),
    ('с', &['с', 'c']),
    ('х', &['х', 'x']),
    ('у', &['у', 'y']),
    ('к', &['к', 'k', 'ᴋ']),
    ('т', &['т', 'ᴛ']),
    ('н', &['н', 'ʜ']),
    ('в', &['в', 'ʙ']),
    ('м', &['м', 'ᴍ']),
    ('А', &['А', 'A']),
    ('Е', &['Е', 'E']),
    ('О', &['О', 'O']),
    ('Р', &['Р', 'P']),
    ('С', &['С', 'C']),
    ('Х', &['Х', 'X']),
    ('У', &['У', 'Y']),
    ('К', &['К', 'K']),
    ('Т', &['Т', 'T']),
    ('Н', &['Н', 'H']),
    ('В', &['В', 'B']),
    ('М', &['М', 'M']),
];

/// Look up the alternates for `c`, original included.
///
/// Returns `None` for characters the table does not cover.
pub fn alternatives(c: char) -> Option<&'static [char]> {
    SUBSTITUTIONS
        .iter()
        .find(|(source, _)| *source == c)
        .map(|(_, alts)| *alts)
}

/// Whether `c` has an entry in the substitution table.
pub fn is_substitutable(c: char) -> bool {
    alternatives(c).is_some()
}

/// Emoji grouped by category, in display order.
pub const EMOJI_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "smileys",
        &["😀", "😃", "😄", "😁", "😊", "😉", "😍", "🤩", "😎", "🤗", "🙂", "😇"],
    ),
    ("hearts", &["❤️", "🧡", "💛", "💚", "💙", "💜", "💖", "💫"]),
    ("nature", &["🌸", "🌼", "🌻", "🌿", "🍀", "🌈", "☀️", "🌙", "⭐"]),
    ("food", &["🍓", "🍒", "🍑", "🍍", "🍩", "🍰", "☕", "🍕"]),
    ("activity", &["🎉", "🎈", "🎁", "🎵", "🎯", "🏆", "🚀", "✨"]),
    ("gestures", &["👍", "👏", "🙌", "🤝", "💪", "👌", "✌️", "🔥"]),
];

/// Every emoji from [`EMOJI_CATEGORIES`], flattened in category order.
static EMOJI_POOL: Lazy<Vec<&'static str>> = Lazy::new(|| {
    EMOJI_CATEGORIES
        .iter()
        .flat_map(|(_, glyphs)| glyphs.iter().copied())
        .collect()
});

/// The flattened emoji pool used for selection. Never empty.
pub fn emoji_pool() -> &'static [&'static str] {
    &EMOJI_POOL
}
