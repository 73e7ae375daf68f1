//! JSON output formatter

use super::TableFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs rows as a pretty-printed JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    rows: Vec<serde_json::Value>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rows: Vec::new(),
        }
    }
}

impl<W: Write, R: Serialize> TableFormatter<R> for JsonFormatter<W> {
    fn write_row(&mut self, row: &R) -> Result<()> {
        self.rows.push(serde_json::to_value(row)?);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.rows)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use letalone_core::{build_report, generate_curves, MetricsRow, TARGET_RECALL};

    #[test]
    fn test_json_array_of_objects() {
        let rows = build_report(&generate_curves(), TARGET_RECALL).unwrap();
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer);
            for row in &rows {
                formatter.write_row(row).unwrap();
            }
            TableFormatter::<MetricsRow>::finish(&mut formatter).unwrap();
        }

        let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let array = parsed.as_array().unwrap();
        assert_eq!(array.len(), 6);
        assert_eq!(array[0]["model"], "full");
        assert_eq!(array[3]["train"], "ewt");
    }

    #[test]
    fn test_empty_table_is_empty_array() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer);
            TableFormatter::<MetricsRow>::finish(&mut formatter).unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap().trim(), "[]");
    }
}
