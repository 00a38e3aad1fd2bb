///
/// CLI error types.
///
/// Each variant carries a miette diagnostic code so failures print with a
/// stable tag and, where useful, a hint.
///

use std::path::PathBuf;

use miette::Diagnostic;
use qolor_csv::CsvError;
use qolor_sqlite3::DbError;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("Cannot read {path}: {source}")]
    #[diagnostic(code(qolor::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    #[diagnostic(code(qolor::config), help("see the [csv], [sqlite], [output] and [log] tables"))]
    InvalidConfig(String),

    #[error("Invalid argument: {0}")]
    #[diagnostic(code(qolor::argument))]
    InvalidArgument(String),

    #[error("Unknown log level '{0}'")]
    #[diagnostic(code(qolor::log), help("use one of trace, debug, info, warn, error"))]
    LogLevel(String),

    #[error(transparent)]
    #[diagnostic(code(qolor::csv))]
    Csv(#[from] CsvError),

    #[error(transparent)]
    #[diagnostic(code(qolor::sqlite))]
    Db(#[from] DbError),

    #[error("Failed to write JSON: {0}")]
    #[diagnostic(code(qolor::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    #[diagnostic(code(qolor::output))]
    Output(#[from] std::io::Error),
}
