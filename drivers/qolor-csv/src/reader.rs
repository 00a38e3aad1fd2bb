use std::fmt::Display;
use std::io::BufRead;
use std::str::FromStr;

use qolor::Cursor;

use crate::cursor::DelimitedCursor;
use crate::errors::CsvError;

/// Stream-style typed reads over a `DelimitedCursor`.
///
/// Fields are consumed left to right; after the last field of a record the
/// reader moves the cursor to the next record and continues from
/// `first_column`.
pub struct FieldReader<'c, R> {
    cursor: &'c mut DelimitedCursor<R>,
    first_column: usize,
    column: usize,
}

impl<'c, R: BufRead> FieldReader<'c, R> {
    pub fn new(cursor: &'c mut DelimitedCursor<R>, first_column: usize) -> Self {
        FieldReader { cursor, first_column, column: first_column }
    }

    /// Parses the next field as `T`.
    pub fn read<T>(&mut self) -> Result<T, CsvError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let (line, field, text) = self.next_field()?;
        text.parse::<T>().map_err(|e| CsvError::Parse {
            line,
            field,
            text,
            reason: e.to_string(),
        })
    }

    /// Discards the next field.
    pub fn skip(&mut self) -> Result<(), CsvError> {
        self.next_field().map(|_| ())
    }

    /// Column the next read will come from.
    pub fn column(&self) -> usize {
        self.column
    }

    fn next_field(&mut self) -> Result<(usize, usize, String), CsvError> {
        loop {
            if self.cursor.is_exhausted() {
                return Err(self.cursor.take_error().map_or(CsvError::Exhausted, CsvError::Io));
            }
            if self.column < self.cursor.num_fields() {
                let field = self.column;
                self.column += 1;
                let text = self.cursor.field(field).to_string();
                let line = self.cursor.line_number();
                if self.column == self.cursor.num_fields() {
                    self.cursor.advance();
                    self.column = self.first_column;
                }
                return Ok((line, field, text));
            }
            self.cursor.advance();
            self.column = self.first_column;
        }
    }
}
