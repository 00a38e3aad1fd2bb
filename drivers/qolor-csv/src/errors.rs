///
/// Delimited text error types.
///
/// Splitting never fails: malformed quoting degrades to best-effort fields.
/// Errors come from the underlying reader and from typed extraction.
///

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("Failed to parse field {field} on line {line} ('{text}'): {reason}")]
    Parse {
        line: usize,
        field: usize,
        text: String,
        reason: String,
    },

    #[error("No more records to read")]
    Exhausted,

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
