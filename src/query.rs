//! Catalog query extraction - "dime 3 peliculas de accion" -> (movie, accion)

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::matcher::matches;
use crate::normalize::{normalize, tokens};
use crate::types::MediaKind;

const CATALOG_KINDS: &[(MediaKind, &[&str])] = &[
    (MediaKind::Movie, &["pelicula", "peliculas", "pelis", "film", "movie"]),
    (MediaKind::Series, &["serie", "series", "tv", "show"]),
    (MediaKind::Book, &["libro", "libros", "novela", "book"]),
];

const CATALOG_GENRES: &[&str] = &[
    "accion",
    "romance",
    "romantica",
    "comedia",
    "drama",
    "ciencia ficcion",
    "suspense",
    "misterio",
    "aventura",
    "terror",
    "fantasia",
];

// Word following a standalone "de" in normalized text.
static DE_GENRE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bde ([a-z0-9]+)").expect("Invalid regex pattern"));

/// Kind and genre to look up in a catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogQuery {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub genre: String,
}

/// Detect a request for recommendations of a given kind and genre.
///
/// The genre comes from the known list, else the word after "de", else the
/// last word when longer than two characters. `None` unless both parts are found.
pub fn catalog_query(text: &str) -> Option<CatalogQuery> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return None;
    }

    let kind = CATALOG_KINDS
        .iter()
        .find(|(_, keywords)| matches(&normalized, *keywords))
        .map(|(kind, _)| *kind)?;

    let genre = CATALOG_GENRES
        .iter()
        .find(|g| matches(&normalized, &[**g]))
        .map(|g| g.to_string())
        .or_else(|| {
            DE_GENRE
                .captures(&normalized)
                .and_then(|cap| cap.get(1))
                .map(|m| m.as_str().to_string())
        })
        .or_else(|| {
            tokens(&normalized)
                .last()
                .filter(|last| last.chars().count() > 2)
                .map(|last| last.to_string())
        })?;

    Some(CatalogQuery { kind, genre })
}
