//! Report command implementation

use super::init_logging;
use crate::config::{PlotConfig, ReportConfig};
use crate::error::CliError;
use crate::output::{create_output, svg::PALETTE, write_table, OutputFormat, Series, SvgPlot};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use letalone_core::constants::file_names;
use letalone_core::{build_report, error_examples, generate_curves, Curve, Direction};
use std::path::{Path, PathBuf};

/// Arguments for the report command
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory for tables [default: out]
    #[arg(long, value_name = "DIR", env = "LETALONE_OUT_DIR")]
    pub out_dir: Option<PathBuf>,

    /// Directory for figures [default: figs]
    #[arg(long, value_name = "DIR", env = "LETALONE_FIG_DIR")]
    pub fig_dir: Option<PathBuf>,

    /// Format of the metrics table [default: csv]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Files written by one report run
#[derive(Debug, Clone, PartialEq)]
pub struct ReportArtifacts {
    pub metrics: PathBuf,
    pub figures: Vec<PathBuf>,
    pub error_examples: PathBuf,
}

impl ReportArgs {
    /// Execute the report command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting report generation");
        log::debug!("Arguments: {:?}", self);

        let config = self.resolve_config()?;
        let artifacts = generate_report(&config, self.quiet)?;

        if !self.quiet {
            println!("✓ Metrics table: {}", artifacts.metrics.display());
            for figure in &artifacts.figures {
                println!("✓ Figure: {}", figure.display());
            }
            println!("✓ Error examples: {}", artifacts.error_examples.display());
        }

        Ok(())
    }

    /// Overlay command-line values on the loaded configuration
    fn resolve_config(&self) -> Result<ReportConfig> {
        let mut config = ReportConfig::load(self.config.as_deref())?;
        if let Some(dir) = &self.out_dir {
            config.output.out_dir = dir.clone();
        }
        if let Some(dir) = &self.fig_dir {
            config.output.fig_dir = dir.clone();
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        Ok(config)
    }
}

/// Build the figure for one direction: one trace per model variant
pub fn build_figure(direction: Direction, curve: &Curve, plot: &PlotConfig) -> SvgPlot {
    let title = format!("Precision-recall: {}", direction.label());
    curve
        .traces()
        .zip(PALETTE)
        .fold(
            SvgPlot::new(title, plot.width, plot.height),
            |svg, ((model, precision), color)| {
                svg.with_series(Series::new(model.label(), color, curve.recall(), precision))
            },
        )
}

fn write_figure(svg: &SvgPlot, path: &Path) -> Result<()> {
    let writer = create_output(path)?;
    svg.render(writer)
        .map_err(|e| CliError::OutputError(format!("{}: {e}", path.display())))?;
    Ok(())
}

/// Generate every report artifact described by `config`
pub fn generate_report(config: &ReportConfig, quiet: bool) -> Result<ReportArtifacts> {
    config.validate()?;

    let curves = generate_curves();
    let rows = build_report(&curves, config.metrics.target_recall).map_err(CliError::from)?;
    for row in &rows {
        log::debug!(
            "{} {}: auc={:.4} p={:.4} r={:.4} f1={:.4}",
            row.direction(),
            row.model,
            row.auc,
            row.precision,
            row.recall,
            row.f1
        );
    }

    let mut progress = ProgressReporter::new(quiet);
    progress.init_artifacts(curves.len() as u64 + 2);

    let format = config.output.format;
    let metrics = config.output.out_dir.join(format!(
        "{}.{}",
        file_names::METRICS_STEM,
        format.extension()
    ));
    write_table(&metrics, format, &rows)
        .with_context(|| format!("Failed to export metrics to {}", metrics.display()))?;
    log::info!("Wrote {} metric rows to {}", rows.len(), metrics.display());
    progress.artifact_written(&metrics.display().to_string());

    let mut figures = Vec::with_capacity(curves.len());
    for (direction, curve) in curves.iter() {
        let path = config.output.fig_dir.join(format!(
            "{}{}.svg",
            file_names::FIGURE_PREFIX,
            direction.slug()
        ));
        write_figure(&build_figure(direction, curve, &config.plot), &path)?;
        log::info!("Wrote {} figure to {}", direction.label(), path.display());
        progress.artifact_written(&path.display().to_string());
        figures.push(path);
    }

    let error_examples_path = config.output.out_dir.join(file_names::ERROR_EXAMPLES);
    write_table(&error_examples_path, OutputFormat::Csv, &error_examples())?;
    log::info!("Wrote error examples to {}", error_examples_path.display());
    progress.artifact_written(&error_examples_path.display().to_string());

    progress.finish();

    Ok(ReportArtifacts {
        metrics,
        figures,
        error_examples: error_examples_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_in(dir: &Path) -> ReportConfig {
        let mut config = ReportConfig::default();
        config.output.out_dir = dir.join("out");
        config.output.fig_dir = dir.join("figs");
        config
    }

    #[test]
    fn test_generate_report_writes_all_artifacts() {
        let temp_dir = TempDir::new().unwrap();
        let artifacts = generate_report(&config_in(temp_dir.path()), true).unwrap();

        assert!(artifacts.metrics.ends_with("out/pr_metrics.csv"));
        assert_eq!(artifacts.figures.len(), 2);
        assert!(artifacts.figures[0].ends_with("figs/pr_curve_gum_to_ewt.svg"));
        assert!(artifacts.figures[1].ends_with("figs/pr_curve_ewt_to_gum.svg"));

        let metrics = fs::read_to_string(&artifacts.metrics).unwrap();
        assert_eq!(metrics.lines().count(), 7);

        let examples = fs::read_to_string(&artifacts.error_examples).unwrap();
        assert_eq!(examples.lines().count(), 3);

        for figure in &artifacts.figures {
            let svg = fs::read_to_string(figure).unwrap();
            assert_eq!(svg.matches("<polyline").count(), 3);
        }
    }

    #[test]
    fn test_markdown_format_changes_extension() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = config_in(temp_dir.path());
        config.output.format = OutputFormat::Markdown;

        let artifacts = generate_report(&config, true).unwrap();
        assert!(artifacts.metrics.ends_with("pr_metrics.md"));
        // Error examples stay CSV regardless of the table format
        assert!(artifacts.error_examples.ends_with("error_examples.csv"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = config_in(temp_dir.path());
        config.metrics.target_recall = -0.1;
        assert!(generate_report(&config, true).is_err());
        assert!(!temp_dir.path().join("out").exists());
    }

    #[test]
    fn test_build_figure_labels() {
        let curves = generate_curves();
        let (direction, curve) = curves.iter().next().unwrap();
        let figure = build_figure(direction, curve, &PlotConfig::default());

        assert_eq!(figure.title, "Precision-recall: GUM → EWT");
        let labels: Vec<&str> = figure.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Full model", "No parallelism", "No licensing"]);
        assert!(figure.series.iter().all(|s| s.points.len() == 21));
    }

    #[test]
    fn test_flags_override_config() {
        let args = ReportArgs {
            config: None,
            out_dir: Some(PathBuf::from("custom/out")),
            fig_dir: None,
            format: Some(OutputFormat::Json),
            quiet: true,
            verbose: 0,
        };
        let config = args.resolve_config().unwrap();
        assert_eq!(config.output.out_dir, PathBuf::from("custom/out"));
        assert_eq!(config.output.fig_dir, PathBuf::from("figs"));
        assert_eq!(config.output.format, OutputFormat::Json);
    }
}
