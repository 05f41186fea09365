//! In-memory catalog lookup by media kind and genre

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::normalize::normalize;
use crate::query::CatalogQuery;
use crate::similarity::is_char_subsequence;
use crate::types::{ContextualItem, MediaKind};

/// Default number of items returned per lookup
pub const DEFAULT_LIMIT: usize = 3;

/// Items that can ground a recommendation
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<ContextualItem>,
}

impl Catalog {
    pub fn new(items: Vec<ContextualItem>) -> Self {
        Self { items }
    }

    /// Load a JSON array of items.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(serde_json::from_str(&raw)?))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Up to `limit` items of `kind` whose genres, title or description
    /// contain the letters of `genre` in order.
    ///
    /// Dropped letters are tolerated ("acion" finds "Acción").
    pub fn find_by_kind_and_genre(
        &self,
        kind: MediaKind,
        genre: &str,
        limit: usize,
    ) -> Vec<ContextualItem> {
        let genre = normalize(genre);
        if genre.is_empty() || !kind.is_known() {
            return Vec::new();
        }

        let found: Vec<ContextualItem> = self
            .items
            .iter()
            .filter(|item| item.kind_label() == kind.as_str())
            .filter(|item| {
                searchable_fields(item).any(|field| is_char_subsequence(&normalize(field), &genre))
            })
            .take(limit)
            .cloned()
            .collect();

        debug!(kind = kind.as_str(), genre = %genre, found = found.len(), "catalog lookup");
        found
    }

    pub fn find(&self, query: &CatalogQuery) -> Vec<ContextualItem> {
        self.find_by_kind_and_genre(query.kind, &query.genre, DEFAULT_LIMIT)
    }
}

fn searchable_fields(item: &ContextualItem) -> impl Iterator<Item = &str> {
    let data = item.data.as_ref();
    data.into_iter()
        .flat_map(|d| d.genres.iter().map(String::as_str))
        .chain(item.title.as_deref())
        .chain(data.and_then(|d| d.description.as_deref()))
}
