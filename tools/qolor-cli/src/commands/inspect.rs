use std::fs::File;
use std::io::{BufReader, Write};

use qolor::debug::{report_cursor, report_functional, report_iterable, report_type, report_value};
use qolor::{IterCursor, RangeCursor, SliceCursor, SliceMutCursor, Synchronized, range, range_with};
use qolor_csv::DelimitedCursor;
use qolor_sqlite3::{Row, RowCursor};

use crate::errors::CliError;

/// Prints capability reports for the built-in cursors and a few sample
/// pipelines.
pub fn run_inspect<W: Write>(out: &mut W) -> Result<(), CliError> {
    report_cursor::<SliceCursor<'static, i32>>(out, "slice")?;
    report_cursor::<SliceMutCursor<'static, i32>>(out, "mutable slice")?;
    report_cursor::<IterCursor<std::vec::IntoIter<String>>>(out, "iterator")?;
    report_cursor::<RangeCursor<f64>>(out, "range")?;
    report_cursor::<Synchronized<RangeCursor<i64>>>(out, "synchronized range")?;
    report_cursor::<DelimitedCursor<BufReader<File>>>(out, "delimited file")?;
    report_cursor::<RowCursor<'static>>(out, "sqlite rows")?;
    report_type::<Row>(out, "sqlite row")?;

    let multiples = range(1, 20).r#where(|n| n % 3 == 0 || n % 5 == 0);
    report_iterable(out, "multiples of 3 or 5 below 20", multiples, true)?;
    report_value(out, "their sum", &range(1, 20).r#where(|n| n % 3 == 0 || n % 5 == 0).sum())?;
    report_iterable(out, "inclusive float range", range_with(0.0, 1.0, 0.25, true), true)?;

    let scale = |x: f64, by: f64| x * by;
    report_functional::<_, (f64, f64)>(out, "binary functional", &scale)?;
    Ok(())
}
