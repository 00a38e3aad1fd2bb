///
/// qolor CLI
///
/// Command-line front end over the qolor crates:
/// - qolor csv <file>: print delimited records as text or JSON
/// - qolor range <from> <to>: evaluate a numeric range, optionally filtered
///   or summed
/// - qolor sql <db> <query>: print the rows of an SQLite query
/// - qolor inspect: print capability reports for the built-in cursors
///
/// Settings are read from `qolor.toml` (see `config`), and flags override
/// the file.
///

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod output;

use std::io::Write;

pub use cli::{Cli, Commands};
pub use config::{Config, Format};
pub use errors::CliError;

use commands::{CsvRequest, RangeRequest, SqlRequest};

/// Log level from the flag, else the config, else `warn`.
pub fn log_level(cli: &Cli, config: &Config) -> Result<tracing::Level, CliError> {
    let level = cli.log_level.as_deref().or(config.log.level.as_deref()).unwrap_or("warn");
    level.parse().map_err(|_| CliError::LogLevel(level.to_string()))
}

/// Runs the parsed command against `config`, writing results to `out`.
pub fn run<W: Write>(cli: Cli, config: &Config, out: &mut W) -> Result<(), CliError> {
    let format = cli.format.unwrap_or(config.output.format);
    match cli.command {
        Commands::Csv { file, separators, quote, fields, header, limit } => {
            let mut options = config.csv.clone();
            if let Some(separators) = separators {
                options.separators = separators;
            }
            if let Some(quote) = quote {
                options.quote = quote;
            }
            let request = CsvRequest { options, fields, header, limit, format };
            commands::run_csv(out, &file, &request)?;
        }
        Commands::Range { from, to, step, inclusive, multiples_of, sum } => {
            let request = RangeRequest { from, to, step, inclusive, multiples_of, sum, format };
            commands::run_range(out, &request)?;
        }
        Commands::Sql { database, query, params, readonly, limit } => {
            let mut sqlite = config.sqlite.clone();
            sqlite.readonly |= readonly;
            let db = commands::open_database(&database, &sqlite)?;
            let request = SqlRequest { sql: query, params, limit, format };
            commands::run_sql(out, &db, &request)?;
        }
        Commands::Inspect => commands::run_inspect(out)?,
    }
    Ok(())
}
