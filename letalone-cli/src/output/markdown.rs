//! Markdown output formatter

use super::{TableFormatter, TableRow};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs rows as a pipe table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    row_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            row_count: 0,
        }
    }

    fn write_header(&mut self, headers: &[&str]) -> Result<()> {
        writeln!(self.writer, "| {} |", headers.join(" | "))?;
        let rule: Vec<&str> = headers.iter().map(|_| "---").collect();
        writeln!(self.writer, "| {} |", rule.join(" | "))?;
        Ok(())
    }
}

impl<W: Write, R: TableRow> TableFormatter<R> for MarkdownFormatter<W> {
    fn write_row(&mut self, row: &R) -> Result<()> {
        if self.row_count == 0 {
            self.write_header(R::headers())?;
        }
        self.row_count += 1;
        let cells: Vec<String> = row.cells().iter().map(|c| c.replace('|', "\\|")).collect();
        writeln!(self.writer, "| {} |", cells.join(" | "))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.row_count == 0 {
            self.write_header(R::headers())?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "*Total rows: {}*", self.row_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
