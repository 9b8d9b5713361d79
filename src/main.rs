//! catrina - antibiotic and clinical protocol chat assistant
//!
//! Usage:
//!   catrina sections <DOCUMENT>         List the numbered sections of a protocol
//!   catrina lookup <DOCUMENT> <QUERY>   Show the first section matching a term
//!   catrina chat                        Chat on stdin/stdout

use anyhow::{Context, Result};
use catrina::assistant::NOT_FOUND_MESSAGE;
use catrina::config::load_config_or_default;
use catrina::{AntibioticCatalog, Assistant, ProtocolIndex, source_for_path};
use clap::{Parser, Subcommand};
use std::io;
use tracing_subscriber::EnvFilter;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "catrina", version, about = "Antibiotic and clinical protocol assistant")]
struct Cli {
    /// Config file (defaults to ./catrina.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log extraction and lookup details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the numbered sections found in a protocol document
    Sections {
        /// PDF or extracted text (pages separated by form feeds)
        document: PathBuf,
        /// Print full sections as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the first section whose heading contains QUERY
    Lookup {
        document: PathBuf,
        query: String,
    },
    /// Interactive chat over stdin/stdout
    Chat {
        /// Protocol document (overrides config)
        #[arg(long)]
        protocol: Option<PathBuf>,
        /// Antibiotic CSV table (overrides config)
        #[arg(long)]
        antibiotics: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok(), cli.verbose))
        .init();

    match cli.command {
        Commands::Sections { document, json } => cmd_sections(&document, json),
        Commands::Lookup { document, query } => cmd_lookup(&document, &query),
        Commands::Chat {
            protocol,
            antibiotics,
        } => cmd_chat(cli.config.as_deref(), protocol, antibiotics),
    }
}

/// RUST_LOG wins over --verbose when it is set and valid
fn log_filter(rust_log: Option<String>, verbose: bool) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(if verbose { "debug" } else { "warn" }))
}

fn load_protocol(path: &Path) -> ProtocolIndex {
    ProtocolIndex::load(source_for_path(path).as_ref())
}

fn cmd_sections(document: &Path, json: bool) -> Result<()> {
    let index = load_protocol(document);

    if json {
        let out = serde_json::to_string_pretty(index.sections())
            .context("Failed to serialize sections")?;
        println!("{}", out);
        return Ok(());
    }

    if index.is_empty() {
        eprintln!("No numbered sections found in {}", document.display());
        return Ok(());
    }
    for section in &index {
        println!("{}", section.heading);
    }
    Ok(())
}

fn cmd_lookup(document: &Path, query: &str) -> Result<()> {
    let index = load_protocol(document);

    match index.lookup(query) {
        Some(section) => println!("{}", section),
        None => println!("{}", NOT_FOUND_MESSAGE),
    }
    Ok(())
}

fn cmd_chat(
    config_path: Option<&Path>,
    protocol: Option<PathBuf>,
    antibiotics: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_or_default(config_path)?.with_overrides(protocol, antibiotics);

    let catalog = match config.antibiotics_path() {
        Some(path) => AntibioticCatalog::from_path(path)
            .with_context(|| format!("Failed to load antibiotics from {}", path.display()))?,
        None => AntibioticCatalog::default(),
    };
    let protocol = config
        .protocol_path()
        .map(load_protocol)
        .unwrap_or_default();

    if catalog.is_empty() && protocol.is_empty() {
        tracing::warn!("No antibiotic table or protocol sections loaded; every query will miss");
    }

    let mut assistant = Assistant::new(catalog, protocol);
    if let Some(name) = config.assistant_name() {
        assistant = assistant.with_name(name);
    }
    tracing::info!(
        "{} ready: {} antibiotics, {} protocol sections",
        assistant.name(),
        assistant.catalog().len(),
        assistant.protocol().len()
    );

    let stdin = io::stdin();
    assistant
        .run_session(stdin.lock(), io::stdout().lock())
        .context("Chat session failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_overrides_verbose_default() {
        let filter = log_filter(Some("catrina=trace".to_string()), false);
        assert_eq!(filter.to_string(), "catrina=trace");
    }

    #[test]
    fn test_verbose_default_without_rust_log() {
        assert_eq!(log_filter(None, true).to_string(), "debug");
        assert_eq!(log_filter(None, false).to_string(), "warn");
    }

    #[test]
    fn test_invalid_rust_log_falls_back() {
        let filter = log_filter(Some("catrina=loud".to_string()), false);
        assert_eq!(filter.to_string(), "warn");
    }
}
