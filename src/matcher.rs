//! Fuzzy keyword matcher - decides whether text (approximately) contains a keyword

use tracing::trace;

use crate::normalize::{normalize, tokens};
use crate::similarity::{contains_in_order, fuzzy_threshold, levenshtein};

/// Which rule accepted a keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    /// Keyword occurs verbatim inside the text
    Substring,
    /// Words of a multi-word keyword occur in order among the tokens
    OrderedTokens,
    /// Some token is within the edit-distance threshold of the keyword
    EditDistance,
}

/// Match normalized text against raw keywords.
///
/// Keywords are normalized here, so callers pass them as written. Returns
/// true as soon as any keyword matches.
pub fn matches<S: AsRef<str>>(normalized: &str, keywords: &[S]) -> bool {
    find_match(normalized, keywords).is_some()
}

/// Like [`matches`], but reports the first matching keyword and the rule that accepted it.
pub fn find_match<'k, S: AsRef<str>>(
    normalized: &str,
    keywords: &'k [S],
) -> Option<(&'k str, MatchRule)> {
    let text_tokens = tokens(normalized);

    for keyword in keywords {
        let raw = keyword.as_ref();
        let kw = normalize(raw);
        if kw.is_empty() {
            continue;
        }

        if let Some(rule) = match_keyword(normalized, &text_tokens, &kw) {
            trace!(keyword = raw, ?rule, "keyword matched");
            return Some((raw, rule));
        }
    }

    None
}

fn match_keyword(text: &str, text_tokens: &[&str], kw: &str) -> Option<MatchRule> {
    if text.contains(kw) {
        return Some(MatchRule::Substring);
    }

    if kw.contains(' ') && contains_in_order(text_tokens, &tokens(kw)) {
        return Some(MatchRule::OrderedTokens);
    }

    let threshold = fuzzy_threshold(kw);
    text_tokens
        .iter()
        .any(|tok| levenshtein(tok, kw) <= threshold)
        .then_some(MatchRule::EditDistance)
}
