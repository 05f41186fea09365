use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use canned_chat::{catalog_query, Command, Config, Engine, Payload, RandomSource, RngSource};

fn main() -> Result<()> {
    // stdout carries only the reply record
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::parse();

    if let Some(Command::Query { text }) = &config.command {
        let query = catalog_query(text);
        println!("{}", serde_json::to_string(&query)?);
        return Ok(());
    }

    let mut raw = String::new();
    io::stdin()
        .read_to_string(&mut raw)
        .context("failed to read payload from stdin")?;

    let payload = Payload::from_json(&raw).unwrap_or_else(|e| {
        warn!(error = %e, "unreadable payload, treating as empty");
        Payload::default()
    });

    let templates = config.templates();
    let catalog = config.catalog();
    let mut engine = Engine::new(&templates);
    if let Some(catalog) = &catalog {
        engine = engine.with_catalog(catalog);
    }

    let envelope = match config.seed {
        Some(seed) => respond(&engine, &payload, &mut RngSource::seeded(seed)),
        None => respond(&engine, &payload, &mut RngSource::thread()),
    }?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{envelope}").context("failed to write reply")?;
    Ok(())
}

fn respond<R: RandomSource>(engine: &Engine<'_>, payload: &Payload, rng: &mut R) -> Result<String> {
    Ok(serde_json::to_string(&engine.respond_envelope(payload, rng))?)
}
