//! Stats command implementation

use super::init_logging;
use crate::error::CliError;
use crate::output::{write_table, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use letalone_core::constants::file_names;
use letalone_core::{corpus_stats, CorpusStats, FeatureRow};
use std::path::{Path, PathBuf};

/// Arguments for the stats command
#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Feature table produced by the extraction step
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Output file [default: <out-dir>/let_alone_stats.<ext>]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Directory for tables
    #[arg(long, value_name = "DIR", env = "LETALONE_OUT_DIR", default_value = "out")]
    pub out_dir: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl StatsArgs {
    /// Execute the stats command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Summarizing features from {}", self.input.display());
        log::debug!("Arguments: {:?}", self);

        let rows = read_features(&self.input)?;
        let stats = corpus_stats(&rows);
        for entry in &stats {
            log::debug!(
                "{}: n={} parallelism={:.3} licensing={:.3}",
                entry.corpus,
                entry.n_tokens,
                entry.parallelism_rate,
                entry.licensing_rate
            );
        }

        let output = self.output_path();
        write_table::<CorpusStats>(&output, self.format, &stats)?;
        log::info!("Wrote stats for {} corpora", stats.len());

        if !self.quiet {
            println!("✓ Corpus stats: {}", output.display());
        }
        Ok(())
    }

    fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let default = Path::new(file_names::CORPUS_STATS).with_extension(self.format.extension());
            self.out_dir.join(default)
        })
    }
}

/// Read the feature table; every record must deserialize
pub fn read_features(path: &Path) -> Result<Vec<FeatureRow>> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let mut rows = Vec::new();
    for (i, record) in reader.deserialize::<FeatureRow>().enumerate() {
        // Header is line 1
        let row = record.map_err(|e| {
            CliError::ProcessingError(format!("{} line {}: {e}", path.display(), i + 2))
        })?;
        rows.push(row);
    }

    log::info!("Loaded {} feature rows", rows.len());
    Ok(rows)
}
