//! Simscore - fuzzy name matching from the command line

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use simscore::{levenshtein, similarity, MatchConfig, Matcher};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to <config dir>/simscore/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the edit distance between two strings
    Distance { a: String, b: String },

    /// Print the case-insensitive similarity of two strings
    Score { a: String, b: String },

    /// Rank candidates against a query
    Match {
        query: String,

        /// Candidates to rank
        candidates: Vec<String>,

        /// Read additional candidates from a file, one per line
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Minimum score for a match (overrides config)
        #[arg(long)]
        cutoff: Option<f64>,

        /// Maximum number of matches (overrides config)
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Config decides the log level, so load it under a temporary warn-level subscriber
    let bootstrap = tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .finish();
    let config = tracing::subscriber::with_default(bootstrap, || match &args.config {
        Some(path) => MatchConfig::load_from(path),
        None => MatchConfig::load(),
    })
    .context("Failed to load config")?;

    // Setup logging
    let level = if args.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!("simscore v{} starting...", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Distance { a, b } => {
            println!("{}", levenshtein(&a, &b));
        }
        Command::Score { a, b } => {
            println!("{:.4}", similarity(&a, &b));
        }
        Command::Match {
            query,
            mut candidates,
            file,
            cutoff,
            limit,
            json,
        } => {
            if let Some(path) = file {
                candidates.extend(read_candidates(&path)?);
            }

            let mut config = config;
            if let Some(cutoff) = cutoff {
                config.cutoff = cutoff;
            }
            if let Some(limit) = limit {
                config.limit = limit;
            }

            let matcher = Matcher::new(config)?;
            let matches = matcher.matches(&query, &candidates)?;
            info!("🎯 {} match(es) for '{}'", matches.len(), query);

            if json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else {
                for m in &matches {
                    println!("{:.4}\t{}", m.score, m.value);
                }
            }

            if matches.is_empty() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Non-blank, trimmed lines of `path`
fn read_candidates(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read candidates from {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}
