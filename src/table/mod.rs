// src/table/mod.rs
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::io::Cursor;

#[derive(Debug, Clone)]
pub struct RawTable {
    /// Column names from the header row of the sheet export.
    /// Whitespace-trimmed on read; case preserved as the sheet claims it.
    pub columns: Vec<String>,
    /// Each data row, one String per column.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Parse a CSV byte buffer with a header row into a RawTable.
    ///
    /// Short rows are padded with empty fields and long rows truncated so
    /// every row shares the header's column set. Errors on malformed CSV;
    /// an empty header or zero data rows is reported by the caller as
    /// `EmptyOrMalformed`, not here.
    pub fn from_csv(data: &[u8]) -> Result<RawTable> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(Cursor::new(data));

        let columns: Vec<String> = rdr
            .headers()
            .context("reading CSV header row")?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let record = result.with_context(|| format!("CSV parse error at record {}", idx))?;
            let mut row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
            row.resize(columns.len(), String::new());
            rows.push(row);
        }

        Ok(RawTable { columns, rows })
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() || self.rows.is_empty()
    }
}
