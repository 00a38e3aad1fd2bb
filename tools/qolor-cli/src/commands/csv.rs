use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use qolor_csv::{CsvOptions, from_delimited_with};
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::config::Format;
use crate::errors::CliError;
use crate::output::{Record, keyed, write_json, write_line};

#[derive(Debug, Clone, Default)]
pub struct CsvRequest {
    pub options: CsvOptions,
    /// Columns to keep, in output order. Empty keeps every column.
    pub fields: Vec<usize>,
    /// Treat the first record as column names.
    pub header: bool,
    pub limit: Option<usize>,
    pub format: Format,
}

/// Prints the records of a delimited file and returns how many were
/// written, not counting the header.
pub fn run_csv<W: Write>(out: &mut W, path: &Path, request: &CsvRequest) -> Result<usize, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io { path: path.to_path_buf(), source })?;
    debug!(path = %path.display(), separators = %request.options.separators, "reading delimited file");
    let mut records = from_delimited_with(BufReader::new(file), &request.options)
        .select(|row| project(row, &request.fields))
        .into_iter();

    let header = if request.header { records.next() } else { None };
    let rows: Vec<Vec<String>> = match request.limit {
        Some(limit) => records.take(limit).collect(),
        None => records.collect(),
    };

    let written = rows.len();
    match request.format {
        Format::Text => {
            if let Some(header) = &header {
                write_line(out, header)?;
            }
            for row in &rows {
                write_line(out, row)?;
            }
        }
        Format::Json => match &header {
            Some(header) => {
                let records: Vec<Record> = rows
                    .into_iter()
                    .map(|row| keyed(header, row.into_iter().map(JsonValue::String)))
                    .collect();
                write_json(out, &records)?;
            }
            None => write_json(out, &rows)?,
        },
    }
    Ok(written)
}

fn project(row: &[String], fields: &[usize]) -> Vec<String> {
    if fields.is_empty() {
        return row.to_vec();
    }
    fields
        .iter()
        .map(|&i| row.get(i).cloned().unwrap_or_default())
        .collect()
}
