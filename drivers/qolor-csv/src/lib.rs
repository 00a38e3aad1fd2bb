///
/// qolor Delimited Text Driver
///
/// Turns line-oriented delimited text into a qolor pipeline source. Each
/// record is a `Vec<String>` of fields, so the usual adaptors apply:
///
/// ```
/// use std::io::Cursor;
///
/// let input = "\"LU\",86.25,\"11/4/1998\"\n\"IBM\",93.5,\"11/5/1998\"\n";
/// let prices: Vec<f64> = qolor_csv::from_csv(Cursor::new(input))
///     .select(|row| row[1].parse::<f64>().unwrap_or_default())
///     .to_vector();
/// assert_eq!(prices, vec![86.25, 93.5]);
/// ```
///
/// Modules:
/// - cursor: `DelimitedCursor` and the field splitter
/// - reader: `FieldReader`, typed sequential field extraction
/// - options: `CsvOptions`, separators, quote character and first column
/// - errors: `CsvError`
///

pub mod cursor;
pub mod errors;
pub mod options;
pub mod reader;

use std::io::BufRead;

use qolor::Iterable;

pub use cursor::{DelimitedCursor, split_line};
pub use errors::CsvError;
pub use options::CsvOptions;
pub use reader::FieldReader;

/// Comma-separated records from `reader`. The first record is read
/// immediately.
pub fn from_csv<R: BufRead>(reader: R) -> Iterable<DelimitedCursor<R>> {
    Iterable::new(DelimitedCursor::new(reader, &CsvOptions::default()))
}

/// Records split on any character of `separators`.
pub fn from_delimited<R: BufRead>(reader: R, separators: &str) -> Iterable<DelimitedCursor<R>> {
    Iterable::new(DelimitedCursor::new(reader, &CsvOptions::with_separators(separators)))
}

pub fn from_delimited_with<R: BufRead>(reader: R, options: &CsvOptions) -> Iterable<DelimitedCursor<R>> {
    Iterable::new(DelimitedCursor::new(reader, options))
}
