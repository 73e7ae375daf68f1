//! CSV output formatter

use super::TableFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// CSV formatter - header row taken from the row type's field names
pub struct CsvFormatter<W: Write> {
    writer: ::csv::Writer<W>,
}

impl<W: Write> CsvFormatter<W> {
    /// Create a new CSV formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer: ::csv::Writer::from_writer(writer),
        }
    }
}

impl<W: Write, R: Serialize> TableFormatter<R> for CsvFormatter<W> {
    fn write_row(&mut self, row: &R) -> Result<()> {
        self.writer.serialize(row)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
