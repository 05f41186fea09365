//! Recommendation slot extraction: media kind and genre

use crate::matcher::matches;
use crate::types::{Genre, MediaKind, RecommendationContext};

/// Media kinds in priority order with their keywords.
pub const MEDIA_KIND_KEYWORDS: &[(MediaKind, &[&str])] = &[
    (MediaKind::Movie, &["pelicula", "peliculas", "movie", "film"]),
    (MediaKind::Series, &["serie", "series", "tv", "show"]),
    (MediaKind::Book, &["libro", "libros", "book"]),
];

/// Reference genre list in priority order.
///
/// Accented spellings are folded by the normalizer, so each genre is listed once.
pub const GENRES: &[&str] = &[
    "accion",
    "comedia",
    "romance",
    "romantica",
    "drama",
    "terror",
    "suspenso",
    "suspense",
    "ciencia ficcion",
    "fantasia",
    "documental",
];

/// Extract recommendation slots from normalized text.
pub struct SlotExtractor {
    kinds: &'static [(MediaKind, &'static [&'static str])],
    genres: &'static [&'static str],
}

impl SlotExtractor {
    pub fn new() -> Self {
        Self {
            kinds: MEDIA_KIND_KEYWORDS,
            genres: GENRES,
        }
    }

    /// First media kind whose keywords match, else [`MediaKind::Unknown`].
    pub fn media_kind(&self, normalized: &str) -> MediaKind {
        self.kinds
            .iter()
            .find(|(_, keywords)| matches(normalized, *keywords))
            .map(|(kind, _)| *kind)
            .unwrap_or_default()
    }

    /// First genre of the reference list found in the text.
    pub fn genre(&self, normalized: &str) -> Option<Genre> {
        self.genres
            .iter()
            .find(|g| matches(normalized, &[**g]))
            .map(|g| Genre(*g))
    }

    pub fn extract(&self, normalized: &str) -> RecommendationContext {
        RecommendationContext {
            kind: self.media_kind(normalized),
            genre: self.genre(normalized),
        }
    }
}

impl Default for SlotExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn extract(s: &str) -> RecommendationContext {
        SlotExtractor::new().extract(&normalize(s))
    }

    #[test]
    fn test_media_kind() {
        assert_eq!(extract("dime una película").kind, MediaKind::Movie);
        assert_eq!(extract("recomienda una serie").kind, MediaKind::Series);
        assert_eq!(extract("recomienda un libro").kind, MediaKind::Book);
        assert_eq!(extract("recomienda algo").kind, MediaKind::Unknown);
    }

    #[test]
    fn test_movie_takes_priority() {
        assert_eq!(extract("peliculas o libros").kind, MediaKind::Movie);
    }

    #[test]
    fn test_genre() {
        let ctx = extract("dime una pelicula de comedia");
        assert_eq!(ctx.genre.map(|g| g.as_str()), Some("comedia"));

        let ctx = extract("recomienda peliculas de terror");
        assert_eq!(ctx.kind, MediaKind::Movie);
        assert_eq!(ctx.genre.map(|g| g.as_str()), Some("terror"));
    }

    #[test]
    fn test_accented_genre() {
        let ctx = extract("Películas de ACCIÓN");
        assert_eq!(ctx.genre.map(|g| g.as_str()), Some("accion"));
    }

    #[test]
    fn test_no_genre() {
        assert_eq!(extract("recomienda algo").genre, None);
    }
}
