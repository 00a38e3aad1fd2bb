use std::fmt::Display;
use std::io::Write;

use qolor::{RangeNum, range_with};
use serde::Serialize;
use tracing::debug;

use crate::config::Format;
use crate::errors::CliError;
use crate::output::write_json;

#[derive(Debug, Clone, Default)]
pub struct RangeRequest {
    pub from: String,
    pub to: String,
    pub step: Option<String>,
    pub inclusive: bool,
    /// Keep only multiples of any of these. Integer ranges only.
    pub multiples_of: Vec<i64>,
    pub sum: bool,
    pub format: Format,
}

/// Evaluates a numeric range. Bounds that all parse as integers select an
/// integer range; otherwise every bound must parse as a float.
pub fn run_range<W: Write>(out: &mut W, request: &RangeRequest) -> Result<(), CliError> {
    let step = request.step.as_deref().unwrap_or("1");
    if let (Ok(from), Ok(to), Ok(step)) = (
        request.from.parse::<i64>(),
        request.to.parse::<i64>(),
        step.parse::<i64>(),
    ) {
        debug!(from, to, step, "integer range");
        let multiples = &request.multiples_of;
        let values = range_with(from, to, step, request.inclusive)
            .r#where(|n| multiples.is_empty() || multiples.iter().any(|m| *m != 0 && n % m == 0));
        return if request.sum {
            emit_scalar(out, values.sum(), request.format)
        } else {
            emit_values(out, &values.to_vector(), request.format)
        };
    }

    if !request.multiples_of.is_empty() {
        return Err(CliError::InvalidArgument(
            "--multiples-of needs integer bounds and step".to_string(),
        ));
    }
    let from = parse_float(&request.from)?;
    let to = parse_float(&request.to)?;
    let step = parse_float(step)?;
    debug!(from, to, step, "float range");
    let values = range_with(from, to, step, request.inclusive);
    if request.sum {
        emit_scalar(out, values.sum(), request.format)
    } else {
        emit_values(out, &values.to_vector(), request.format)
    }
}

fn parse_float(text: &str) -> Result<f64, CliError> {
    text.parse::<f64>()
        .map_err(|e| CliError::InvalidArgument(format!("'{text}' is not a number: {e}")))
}

fn emit_scalar<W, N>(out: &mut W, value: N, format: Format) -> Result<(), CliError>
where
    W: Write,
    N: RangeNum + Display + Serialize,
{
    match format {
        Format::Text => writeln!(out, "{value}")?,
        Format::Json => write_json(out, &value)?,
    }
    Ok(())
}

fn emit_values<W, N>(out: &mut W, values: &[N], format: Format) -> Result<(), CliError>
where
    W: Write,
    N: RangeNum + Display + Serialize,
{
    match format {
        Format::Text => {
            for value in values {
                writeln!(out, "{value}")?;
            }
        }
        Format::Json => write_json(out, values)?,
    }
    Ok(())
}
