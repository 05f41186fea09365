//! Text normalization for keyword matching
//!
//! Folds case, strips accents and punctuation, and collapses whitespace so
//! that "¡Película!" and "pelicula" compare equal.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Reserved accented letter kept by the alphabet filter.
pub const RESERVED_LETTER: char = 'ñ';

// Only nonspacing marks are accents; spacing and enclosing marks fall to the
// alphabet filter below.
static NONSPACING_MARK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{Mn}").expect("Invalid regex pattern"));

/// Normalize text for matching.
///
/// Performs:
/// - Lowercase conversion
/// - Canonical decomposition (NFD) with nonspacing marks (`Mn`) dropped
/// - Every character outside `a-z`, `0-9`, [`RESERVED_LETTER`] and space replaced with a space
/// - Whitespace collapsing and trimming
///
/// Idempotent: normalizing normalized text returns it unchanged.
pub fn normalize(text: &str) -> String {
    let decomposed: String = text.to_lowercase().nfd().collect();
    let stripped: String = NONSPACING_MARK
        .replace_all(&decomposed, "")
        .chars()
        .map(|c| if is_kept(c) { c } else { ' ' })
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_kept(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == RESERVED_LETTER || c == ' '
}

/// Split normalized text into tokens.
pub fn tokens(normalized: &str) -> Vec<&str> {
    normalized.split(' ').filter(|t| !t.is_empty()).collect()
}
