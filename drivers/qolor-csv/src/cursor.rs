///
/// Delimited Text Cursor
///
/// `DelimitedCursor` reads one record per line from a `BufRead`. Blank
/// lines are skipped and trailing `\n` / `\r\n` is stripped. The empty line
/// is the end-of-stream state: a cursor is exhausted exactly when its
/// current line is empty, and two cursors are equal when their current
/// lines are.
///
/// Field splitting:
/// - an unquoted field runs to the next separator character,
/// - a quoted field runs to its closing quote, with a doubled quote read
///   as one literal quote; text between the closing quote and the next
///   separator is appended as-is,
/// - an unterminated quote takes the rest of the line,
/// - a trailing separator produces a trailing empty field.
///
/// A read error ends the sequence; it is logged and kept for
/// `take_error`.
///

use std::io::{self, BufRead};

use memchr::memchr;
use qolor::{Category, Cursor};
use smallvec::SmallVec;
use tracing::warn;

use crate::options::CsvOptions;

pub struct DelimitedCursor<R> {
    reader: R,
    separators: SmallVec<[char; 4]>,
    quote: char,
    line: String,
    fields: Vec<String>,
    line_no: usize,
    error: Option<io::Error>,
}

impl<R: BufRead> DelimitedCursor<R> {
    /// Reads the first record immediately.
    pub fn new(reader: R, options: &CsvOptions) -> Self {
        let mut cursor = DelimitedCursor {
            reader,
            separators: options.separator_set(),
            quote: options.quote,
            line: String::new(),
            fields: Vec::new(),
            line_no: 0,
            error: None,
        };
        cursor.read_record();
        cursor
    }

    /// Raw text of the current record.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// 1-based line number of the current record in the input.
    pub fn line_number(&self) -> usize {
        self.line_no
    }

    pub fn num_fields(&self) -> usize {
        self.fields.len()
    }

    /// Field `index` of the current record, or `""` past the last field.
    pub fn field(&self, index: usize) -> &str {
        self.fields.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn read_record(&mut self) {
        self.line.clear();
        self.fields.clear();
        loop {
            match self.reader.read_line(&mut self.line) {
                Ok(0) => return,
                Ok(_) => {
                    self.line_no += 1;
                    let trimmed = self.line.trim_end_matches(['\n', '\r']).len();
                    self.line.truncate(trimmed);
                    if !self.line.is_empty() {
                        break;
                    }
                }
                Err(err) => {
                    warn!(line = self.line_no + 1, error = %err, "delimited text read failed");
                    self.line.clear();
                    self.error = Some(err);
                    return;
                }
            }
        }
        self.fields = split_line(&self.line, &self.separators, self.quote);
    }
}

impl<R: BufRead> Cursor for DelimitedCursor<R> {
    type Item = Vec<String>;

    const CATEGORY: Category = Category::Input;

    fn is_exhausted(&mut self) -> bool {
        self.line.is_empty()
    }

    fn current(&mut self) -> Option<&Vec<String>> {
        if self.line.is_empty() { None } else { Some(&self.fields) }
    }

    fn advance(&mut self) {
        if !self.line.is_empty() {
            self.read_record();
        }
    }
}

impl<R> PartialEq for DelimitedCursor<R> {
    fn eq(&self, other: &Self) -> bool {
        self.line == other.line
    }
}

/// Splits one line into fields.
pub fn split_line(line: &str, separators: &[char], quote: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut rest = line;
    loop {
        let (field, next) = match rest.strip_prefix(quote) {
            Some(quoted) => split_quoted(quoted, separators, quote),
            None => split_plain(rest, separators),
        };
        fields.push(field);
        match next {
            Some(after) => rest = after,
            None => return fields,
        }
    }
}

fn split_plain<'a>(text: &'a str, separators: &[char]) -> (String, Option<&'a str>) {
    match text.char_indices().find(|(_, c)| separators.contains(c)) {
        Some((i, sep)) => (text[..i].to_string(), Some(&text[i + sep.len_utf8()..])),
        None => (text.to_string(), None),
    }
}

fn find_quote(text: &str, quote: char) -> Option<usize> {
    if quote.is_ascii() {
        memchr(quote as u8, text.as_bytes())
    } else {
        text.find(quote)
    }
}

fn split_quoted<'a>(text: &'a str, separators: &[char], quote: char) -> (String, Option<&'a str>) {
    let mut field = String::new();
    let mut rest = text;
    loop {
        let Some(i) = find_quote(rest, quote) else {
            field.push_str(rest);
            return (field, None);
        };
        field.push_str(&rest[..i]);
        let after = &rest[i + quote.len_utf8()..];
        if let Some(escaped) = after.strip_prefix(quote) {
            field.push(quote);
            rest = escaped;
            continue;
        }
        let (tail, next) = split_plain(after, separators);
        field.push_str(&tail);
        return (field, next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor as IoCursor;

    fn split(line: &str) -> Vec<String> {
        split_line(line, &[','], '"')
    }

    #[test]
    fn test_split_plain() {
        assert_eq!(split("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(split("single"), vec!["single"]);
    }

    #[test]
    fn test_split_quoted_sample() {
        assert_eq!(
            split("\"LU\",86.25,\"11/4/1998\",\"2:19PM\",+4.0625"),
            vec!["LU", "86.25", "11/4/1998", "2:19PM", "+4.0625"]
        );
    }

    #[test]
    fn test_split_doubled_quotes() {
        assert_eq!(split("\"say \"\"hi\"\"\",x"), vec!["say \"hi\"", "x"]);
        assert_eq!(split("\"\"\"\""), vec!["\""]);
        assert_eq!(split("\"\",x"), vec!["", "x"]);
    }

    #[test]
    fn test_split_text_after_closing_quote() {
        assert_eq!(split("\"ab\"cd,e"), vec!["abcd", "e"]);
    }

    #[test]
    fn test_split_unterminated_quote() {
        assert_eq!(split("\"open, still open"), vec!["open, still open"]);
    }

    #[test]
    fn test_split_empty_fields() {
        assert_eq!(split("a,,b"), vec!["a", "", "b"]);
        assert_eq!(split("a,b,"), vec!["a", "b", ""]);
        assert_eq!(split(",a"), vec!["", "a"]);
    }

    #[test]
    fn test_split_several_separators() {
        let fields = split_line("a;b\tc", &[';', '\t'], '"');
        assert_eq!(fields, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_cursor_skips_blank_lines() {
        let input = "a,b\r\n\n\r\nc,d\n";
        let mut cursor = DelimitedCursor::new(IoCursor::new(input), &CsvOptions::default());
        assert_eq!(cursor.line(), "a,b");
        assert_eq!(cursor.line_number(), 1);
        cursor.advance();
        assert_eq!(cursor.current(), Some(&vec!["c".to_string(), "d".to_string()]));
        assert_eq!(cursor.line_number(), 4);
        cursor.advance();
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.field(0), "");
    }

    #[test]
    fn test_cursor_equality_is_line_equality() {
        let options = CsvOptions::default();
        let a = DelimitedCursor::new(IoCursor::new("x,1\n"), &options);
        let b = DelimitedCursor::new(IoCursor::new("x,1\ny,2\n"), &options);
        assert!(a == b);
        let mut end = DelimitedCursor::new(IoCursor::new(""), &options);
        assert!(end.is_exhausted());
        assert!(a != end);
    }

    #[test]
    fn test_field_accessors() {
        let cursor = DelimitedCursor::new(IoCursor::new("1,2,3"), &CsvOptions::default());
        assert_eq!(cursor.num_fields(), 3);
        assert_eq!(cursor.field(2), "3");
        assert_eq!(cursor.field(3), "");
    }

    struct FailingReader;

    impl io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("device unplugged"))
        }
    }

    #[test]
    fn test_read_error_ends_stream() {
        let reader = io::BufReader::new(FailingReader);
        let mut cursor = DelimitedCursor::new(reader, &CsvOptions::default());
        assert!(cursor.is_exhausted());
        let err = cursor.take_error().unwrap();
        assert_eq!(err.to_string(), "device unplugged");
        assert!(cursor.take_error().is_none());
    }
}
