use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Splitting options, deserializable from a `[csv]` config table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CsvOptions {
    /// Every character in this string ends an unquoted field.
    pub separators: String,
    pub quote: char,
    /// Column at which typed reads start on each record.
    pub first_column: usize,
}

impl Default for CsvOptions {
    fn default() -> Self {
        CsvOptions { separators: ",".to_string(), quote: '"', first_column: 0 }
    }
}

impl CsvOptions {
    pub fn with_separators(separators: impl Into<String>) -> Self {
        CsvOptions { separators: separators.into(), ..CsvOptions::default() }
    }

    pub(crate) fn separator_set(&self) -> SmallVec<[char; 4]> {
        let set: SmallVec<[char; 4]> = self.separators.chars().collect();
        if set.is_empty() { SmallVec::from_slice(&[',']) } else { set }
    }
}
