//! Response template store: category name to candidate replies

use std::fs;
use std::path::Path;

use ahash::AHashMap;
use once_cell::sync::Lazy;
use serde_json::Value;
use tracing::warn;

use crate::error::{Error, Result};
use crate::random::RandomSource;

/// Categories the composer reads
pub const CATEGORIES: &[&str] = &[
    "greetings",
    "howareyou",
    "farewells",
    "thanks",
    "jokes",
    "capabilities",
    "acknowledge",
    "more_variants",
    "clarify_more",
    "smalltalk",
    "fallback_questions",
];

const BUILTIN_JSON: &str = include_str!("../responses/llm_responses.json");

static BUILTIN: Lazy<ResponseTemplates> = Lazy::new(|| {
    ResponseTemplates::from_json(BUILTIN_JSON).unwrap_or_else(|e| {
        warn!(error = %e, "built-in templates unusable");
        ResponseTemplates::default()
    })
});

/// Read-only mapping from category to ordered candidate strings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseTemplates {
    categories: AHashMap<String, Vec<String>>,
}

impl ResponseTemplates {
    /// Templates shipped with the crate.
    pub fn builtin() -> &'static ResponseTemplates {
        &BUILTIN
    }

    /// Parse a JSON object of `category -> [string, ...]`.
    ///
    /// Non-array categories and non-string entries are skipped.
    pub fn from_json(raw: &str) -> Result<Self> {
        let Value::Object(map) = serde_json::from_str::<Value>(raw)? else {
            return Err(Error::InvalidTemplates(
                "top-level value must be an object".to_string(),
            ));
        };

        let mut categories = AHashMap::with_capacity(map.len());
        for (name, value) in map {
            match value {
                Value::Array(entries) => {
                    let candidates = entries
                        .into_iter()
                        .filter_map(|e| match e {
                            Value::String(s) => Some(s),
                            _ => None,
                        })
                        .collect();
                    categories.insert(name, candidates);
                }
                _ => warn!(category = %name, "template category is not a list, skipping"),
            }
        }

        Ok(Self { categories })
    }

    /// Load templates from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn insert(&mut self, category: impl Into<String>, candidates: Vec<String>) {
        self.categories.insert(category.into(), candidates);
    }

    /// Candidates for a category; empty when absent.
    pub fn candidates(&self, category: &str) -> &[String] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Randomly choose a candidate from a category.
    pub fn choose<R: RandomSource>(&self, category: &str, rng: &mut R) -> Option<&str> {
        let candidates = self.candidates(category);
        if candidates.is_empty() {
            warn!(category, "no templates for category");
        }
        rng.choose(candidates).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
