use anyhow::Result;
use clap::{Parser, Subcommand};
use phenomatch_matcher::Matcher;
use std::path::PathBuf;

mod commands;

/// Phenomatch: approximate lexical matcher for phenotype ontology coding.
#[derive(Parser, Debug)]
#[command(name = "phenomatch", version, about)]
struct Cli {
    /// Extended ontology source (aliases and synonyms)
    #[arg(long)]
    extended: PathBuf,

    /// Canonical ontology source (one record per concept)
    #[arg(long)]
    canonical: PathBuf,

    /// VIP word lexicon (whitespace-separated tokens per line)
    #[arg(long)]
    lexicon: PathBuf,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Match a free-text phenotype description against the ontology
    Match {
        /// Text to match
        text: String,

        /// Minimum score; only strictly higher candidates are returned
        #[arg(long, default_value_t = phenomatch_core::MATCH_THRESHOLD)]
        threshold: f64,

        /// Print one JSON object per match instead of a table
        #[arg(long)]
        json: bool,

        /// Keep only the best N matches
        #[arg(long)]
        top: Option<usize>,
    },
    /// Print index statistics
    Inspect,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let matcher = Matcher::new(&cli.extended, &cli.canonical, &cli.lexicon)?;

    match &cli.command {
        Command::Match {
            text,
            threshold,
            json,
            top,
        } => commands::match_cmd::run(&matcher, text, *threshold, *json, *top),
        Command::Inspect => commands::inspect::run(&matcher),
    }
}

fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
