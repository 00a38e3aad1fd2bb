///
/// Output formatting shared by the subcommands.
///
/// Text output is one record per line with tab-separated fields. JSON output
/// is a single document followed by a newline; keyed records keep their
/// column order.
///

use std::io::Write;

use indexmap::IndexMap;
use qolor_sqlite3::Value;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::errors::CliError;

pub type Record = IndexMap<String, JsonValue>;

pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_line<W: Write, S: AsRef<str>>(out: &mut W, fields: &[S]) -> Result<(), CliError> {
    let mut first = true;
    for field in fields {
        if !first {
            out.write_all(b"\t")?;
        }
        out.write_all(field.as_ref().as_bytes())?;
        first = false;
    }
    writeln!(out)?;
    Ok(())
}

/// Pairs header names with values; extra values get positional keys.
pub fn keyed<I>(header: &[String], values: I) -> Record
where
    I: IntoIterator<Item = JsonValue>,
{
    values
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            let key = header.get(i).cloned().unwrap_or_else(|| format!("column{i}"));
            (key, value)
        })
        .collect()
}

pub fn sql_to_json(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Integer(i) => JsonValue::from(*i),
        Value::Real(f) => serde_json::Number::from_f64(*f).map_or(JsonValue::Null, JsonValue::Number),
        Value::Text(s) => JsonValue::String(s.clone()),
        Value::Blob(b) => JsonValue::String(format!("<blob {} bytes>", b.len())),
    }
}

pub fn sql_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Integer(i) => i.to_string(),
        Value::Real(f) => f.to_string(),
        Value::Text(s) => s.clone(),
        Value::Blob(b) => format!("<blob {} bytes>", b.len()),
    }
}
