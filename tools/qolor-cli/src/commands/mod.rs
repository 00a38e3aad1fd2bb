///
/// Subcommand implementations.
///
/// Each command writes to a caller-supplied `io::Write`, so the binary
/// passes stdout and tests pass a buffer.
///

pub mod csv;
pub mod inspect;
pub mod range;
pub mod sql;

pub use csv::{CsvRequest, run_csv};
pub use inspect::run_inspect;
pub use range::{RangeRequest, run_range};
pub use sql::{SqlRequest, open_database, run_sql};
