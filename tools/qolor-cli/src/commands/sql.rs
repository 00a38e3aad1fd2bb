use std::io::Write;
use std::path::Path;
use std::time::Duration;

use qolor_sqlite3::{Bind, Database, OpenOptions, Query, Row};
use tracing::{debug, info};

use crate::config::{Format, SqliteConfig};
use crate::errors::CliError;
use crate::output::{Record, keyed, sql_to_json, sql_to_text, write_json, write_line};

#[derive(Debug, Clone, Default)]
pub struct SqlRequest {
    pub sql: String,
    /// Bound to `?1`, `?2`, ... as text.
    pub params: Vec<String>,
    pub limit: Option<usize>,
    pub format: Format,
}

pub fn open_database(path: &Path, config: &SqliteConfig) -> Result<Database, CliError> {
    let options = if config.readonly { OpenOptions::readonly() } else { OpenOptions::default() };
    let db = Database::open_with(path, options)?;
    if let Some(ms) = config.busy_timeout_ms {
        db.set_busy_timeout(Duration::from_millis(ms))?;
    }
    Ok(db)
}

/// Runs one statement and prints its rows. Statements without result
/// columns report the number of changed rows instead.
pub fn run_sql<W: Write>(out: &mut W, db: &Database, request: &SqlRequest) -> Result<usize, CliError> {
    let mut query = Query::new(db, &request.sql)?;
    for (i, param) in request.params.iter().enumerate() {
        query.bind(i + 1, param.as_str())?;
    }
    let header: Vec<String> = query.columns().to_vec();

    let mut cursor = query.cursor();
    let rows: Vec<Row> = match request.limit {
        Some(limit) => qolor::from_cursor(&mut cursor).take(limit).to_vector(),
        None => qolor::from_cursor(&mut cursor).to_vector(),
    };
    if let Some(err) = cursor.take_error() {
        return Err(err.into());
    }
    drop(cursor);
    debug!(rows = rows.len(), "query finished");

    if header.is_empty() {
        let changed = db.changes()?;
        info!(changed, "statement executed");
        if request.format == Format::Text {
            writeln!(out, "{changed} row(s) changed")?;
        } else {
            write_json(out, &serde_json::json!({ "changed": changed }))?;
        }
        return Ok(0);
    }

    match request.format {
        Format::Text => {
            write_line(out, &header)?;
            for row in &rows {
                let fields: Vec<String> = row.values().iter().map(sql_to_text).collect();
                write_line(out, &fields)?;
            }
        }
        Format::Json => {
            let records: Vec<Record> = rows
                .iter()
                .map(|row| keyed(&header, row.values().iter().map(sql_to_json)))
                .collect();
            write_json(out, &records)?;
        }
    }
    Ok(rows.len())
}
