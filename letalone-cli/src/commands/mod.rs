//! CLI command implementations

use anyhow::Result;
use clap::{Parser, Subcommand};
use letalone_core::{Corpus, Direction, ModelVariant};

pub mod generate_config;
pub mod report;
pub mod stats;

/// Evaluation artifacts for the cross-corpus *let alone* study
#[derive(Debug, Parser)]
#[command(name = "letalone", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write the PR metrics table, figures and error-example table
    Report(report::ReportArgs),

    /// Summarize an extracted feature table per corpus
    Stats(stats::StatsArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a report configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List corpora
    Corpora,

    /// List model variants
    Models,

    /// List cross-corpus evaluation directions
    Directions,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Report(args) => args.execute(),
            Commands::Stats(args) => args.execute(),
            Commands::List { subcommand } => {
                for line in subcommand.lines() {
                    println!("{line}");
                }
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// One tab-separated `id<TAB>description` line per entry
    pub fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Corpora => Corpus::ALL
                .iter()
                .map(|c| format!("{}\t{}", c.as_str(), c.display_name()))
                .collect(),
            ListCommands::Models => ModelVariant::ALL
                .iter()
                .map(|m| format!("{}\t{}", m.as_str(), m.label()))
                .collect(),
            ListCommands::Directions => Direction::ALL
                .iter()
                .map(|d| format!("{}\t{}", d.slug(), d.label()))
                .collect(),
        }
    }
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` takes precedence over the verbosity flag. Repeated calls are
/// ignored.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
