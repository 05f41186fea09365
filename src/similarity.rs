//! String distance primitives
//!
//! Exact edit distance and ordered-sequence checks used by the fuzzy matcher
//! and the catalog lookup.

/// Keywords up to this many characters tolerate a single edit.
pub const SHORT_KEYWORD_LEN: usize = 4;

/// Maximum edit distance accepted between a token and `keyword`.
///
/// 1 for keywords of at most [`SHORT_KEYWORD_LEN`] characters, 2 otherwise.
pub fn fuzzy_threshold(keyword: &str) -> usize {
    if keyword.chars().count() <= SHORT_KEYWORD_LEN {
        1
    } else {
        2
    }
}

/// Levenshtein distance: insertions, deletions and substitutions each cost 1.
///
/// Computed over chars with a two-row dynamic programming table.
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();
    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Whether every word of `words` occurs in `tokens` in order.
///
/// Words need not be contiguous; each lookup resumes strictly after the
/// previous hit.
pub fn contains_in_order(tokens: &[&str], words: &[&str]) -> bool {
    let mut cursor = 0;
    for word in words {
        match tokens[cursor..].iter().position(|t| t == word) {
            Some(offset) => cursor += offset + 1,
            None => return false,
        }
    }
    true
}

/// Whether the characters of `needle` appear in `haystack` in order.
///
/// Case-insensitive; whitespace in `needle` is ignored. An empty needle
/// never matches.
pub fn is_char_subsequence(haystack: &str, needle: &str) -> bool {
    let mut wanted = needle
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .peekable();
    if wanted.peek().is_none() {
        return false;
    }

    for c in haystack.chars().flat_map(char::to_lowercase) {
        match wanted.peek() {
            Some(&w) if w == c => {
                wanted.next();
            }
            Some(_) => {}
            None => break,
        }
    }
    wanted.peek().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_known_values() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("pelicla", "pelicula"), 1);
        assert_eq!(levenshtein("hoal", "hola"), 2);
    }

    #[test]
    fn test_levenshtein_empty() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
    }

    #[test]
    fn test_levenshtein_counts_chars_not_bytes() {
        assert_eq!(levenshtein("año", "ano"), 1);
    }

    #[test]
    fn test_threshold() {
        assert_eq!(fuzzy_threshold("hola"), 1);
        assert_eq!(fuzzy_threshold("tv"), 1);
        assert_eq!(fuzzy_threshold("serie"), 2);
        assert_eq!(fuzzy_threshold("ciencia ficcion"), 2);
    }

    #[test]
    fn test_contains_in_order() {
        let tokens = ["como", "te", "va", "estas", "bien"];
        assert!(contains_in_order(&tokens, &["como", "estas"]));
        assert!(!contains_in_order(&tokens, &["estas", "como"]));
        assert!(!contains_in_order(&tokens, &["como", "como"]));
        assert!(contains_in_order(&tokens, &[]));
    }

    #[test]
    fn test_char_subsequence() {
        assert!(is_char_subsequence("Acción", "accin"));
        assert!(is_char_subsequence("Ciencia ficcion", "ciencia ficcion"));
        assert!(!is_char_subsequence("Drama", "comedia"));
        assert!(!is_char_subsequence("Drama", "  "));
    }
}
