//! Output formatting module
//!
//! Tables go through a [`TableFormatter`] chosen by [`OutputFormat`]; figures
//! are rendered by [`SvgPlot`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub mod csv;
pub mod json;
pub mod markdown;
pub mod rows;
pub mod svg;

pub use self::csv::CsvFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use rows::TableRow;
pub use svg::{Series, SvgPlot};

/// Trait for table formatters
pub trait TableFormatter<R> {
    /// Format and output a single row
    fn write_row(&mut self, row: &R) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported table formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-separated values with a header row
    #[default]
    Csv,
    /// JSON array of row objects
    Json,
    /// Markdown pipe table
    Markdown,
}

impl OutputFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "md",
        }
    }
}

/// Build the formatter for `format` on top of `writer`
pub fn create_formatter<'w, R>(
    format: OutputFormat,
    writer: Box<dyn Write + 'w>,
) -> Box<dyn TableFormatter<R> + 'w>
where
    R: Serialize + TableRow,
{
    match format {
        OutputFormat::Csv => Box::new(CsvFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

/// Open `path` for writing, creating missing parent directories
pub fn create_output(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Write `rows` to `path` in the given format
pub fn write_table<R>(path: &Path, format: OutputFormat, rows: &[R]) -> Result<()>
where
    R: Serialize + TableRow,
{
    let writer = create_output(path)?;
    let mut formatter = create_formatter::<R>(format, Box::new(writer));
    for row in rows {
        formatter.write_row(row)?;
    }
    formatter
        .finish()
        .with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_extensions() {
        assert_eq!(OutputFormat::Csv.extension(), "csv");
        assert_eq!(OutputFormat::Json.extension(), "json");
        assert_eq!(OutputFormat::Markdown.extension(), "md");
    }

    #[test]
    fn test_format_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: OutputFormat,
        }
        let parsed: Wrapper = toml::from_str("format = \"markdown\"").unwrap();
        assert_eq!(parsed.format, OutputFormat::Markdown);
    }

    #[test]
    fn test_create_output_makes_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("deeper").join("table.csv");

        let mut writer = create_output(&path).unwrap();
        writeln!(writer, "header").unwrap();
        writer.flush().unwrap();

        assert!(path.exists());
    }
}
