//! Word normalization for vocabulary comparison.

/// Trailing characters stripped before comparison.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '\'', '"'];

/// Strip one or more trailing punctuation characters from a word.
pub fn strip_trailing_punctuation(word: &str) -> &str {
    word.trim_end_matches(TRAILING_PUNCTUATION)
}

/// Normalize a word for vocabulary membership tests.
///
/// Strips trailing punctuation and lowercases. Normalization exists only for
/// comparison; the original word is always what gets emitted downstream.
pub fn normalize(word: &str) -> String {
    strip_trailing_punctuation(word).to_lowercase()
}
