//! Generate config command implementation

use crate::config::ReportConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating report configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the output directories and figure size");
        println!("2. Generate the report:");
        println!("   letalone report --config {}", self.output.display());

        Ok(())
    }

    /// Generate template configuration content from the defaults
    fn generate_template(&self) -> String {
        let defaults = ReportConfig::default();
        format!(
            r#"# letalone report configuration
#
# Command-line flags and the LETALONE_OUT_DIR / LETALONE_FIG_DIR environment
# variables take precedence over the values below.

[output]
# Directory for the metrics and error-example tables
out_dir = "{}"

# Directory for the precision-recall figures
fig_dir = "{}"

# Metrics table format: "csv", "json" or "markdown"
format = "csv"

[plot]
# Figure size in pixels
width = {}
height = {}

[metrics]
# Recall value at which precision, recall and F1 are reported
target_recall = {:?}
"#,
            defaults.output.out_dir.display(),
            defaults.output.fig_dir.display(),
            defaults.plot.width,
            defaults.plot.height,
            defaults.metrics.target_recall
        )
    }
}
