//! Command-line and environment configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::warn;

use crate::catalog::Catalog;
use crate::templates::ResponseTemplates;

#[derive(Debug, Parser)]
#[command(
    name = "canned-chat",
    version,
    about = "Classify one utterance read as JSON from stdin and print a canned reply"
)]
pub struct Config {
    /// JSON template store (category -> list of replies); built-in table when unset
    #[arg(long, env = "CANNED_CHAT_RESPONSES")]
    pub responses: Option<PathBuf>,

    /// JSON array of catalog items used when a recommendation arrives without db_items
    #[arg(long, env = "CANNED_CHAT_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Seed for reproducible template selection
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the catalog query (type and genre) detected in TEXT, or null
    Query { text: String },
}

impl Config {
    /// Configured template store.
    ///
    /// An unreadable or invalid file degrades to an empty store.
    pub fn templates(&self) -> ResponseTemplates {
        match &self.responses {
            None => ResponseTemplates::builtin().clone(),
            Some(path) => ResponseTemplates::load(path).unwrap_or_else(|e| {
                warn!(error = %e, "could not load templates, using an empty store");
                ResponseTemplates::default()
            }),
        }
    }

    /// Configured catalog, if any loads.
    pub fn catalog(&self) -> Option<Catalog> {
        let path = self.catalog.as_ref()?;
        match Catalog::load(path) {
            Ok(catalog) => Some(catalog),
            Err(e) => {
                warn!(error = %e, "could not load catalog, continuing without it");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config {
            responses: None,
            catalog: None,
            seed: None,
            command: None,
        };
        assert!(config.catalog().is_none());
        assert_eq!(
            config.templates().candidates("greetings"),
            ResponseTemplates::builtin().candidates("greetings")
        );

        let parsed = Config::try_parse_from(["canned-chat"]).unwrap();
        assert!(parsed.seed.is_none());
        assert!(parsed.command.is_none());
    }

    #[test]
    fn test_query_subcommand() {
        let args = ["canned-chat", "--seed", "7", "query", "series de drama"];
        let config = Config::try_parse_from(args).unwrap();
        assert_eq!(config.seed, Some(7));
        match config.command {
            Some(Command::Query { text }) => assert_eq!(text, "series de drama"),
            other => panic!("Expected query command, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_template_path_degrades() {
        let config = Config::try_parse_from([
            "canned-chat",
            "--responses",
            "/nonexistent/llm_responses.json",
            "--catalog",
            "/nonexistent/catalog.json",
        ])
        .unwrap();
        assert!(config.templates().is_empty());
        assert!(config.catalog().is_none());
    }
}
