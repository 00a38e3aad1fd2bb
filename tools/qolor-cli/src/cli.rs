use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Format;

#[derive(Debug, Parser)]
#[command(name = "qolor")]
#[command(author, version, about = "Lazy query pipelines over files, ranges and databases", long_about = None)]
pub struct Cli {
    /// Config file (defaults to ./qolor.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Output format, overriding the config
    #[arg(long, global = true, value_enum)]
    pub format: Option<Format>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the records of a delimited text file
    Csv {
        /// The file to read
        file: PathBuf,

        /// Field separator characters
        #[arg(long)]
        separators: Option<String>,

        /// Quote character
        #[arg(long)]
        quote: Option<char>,

        /// Columns to keep, comma-separated (0-based)
        #[arg(long, value_delimiter = ',')]
        fields: Vec<usize>,

        /// Treat the first record as column names
        #[arg(long)]
        header: bool,

        /// Stop after this many records
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Evaluate a numeric range
    Range {
        /// First value
        #[arg(allow_negative_numbers = true)]
        from: String,

        /// End of the range (exclusive unless --inclusive)
        #[arg(allow_negative_numbers = true)]
        to: String,

        /// Distance between values
        #[arg(long, allow_negative_numbers = true)]
        step: Option<String>,

        /// Continue through the first value at or past the end
        #[arg(long)]
        inclusive: bool,

        /// Keep only multiples of any of these, comma-separated
        #[arg(long, value_delimiter = ',')]
        multiples_of: Vec<i64>,

        /// Print the sum instead of the values
        #[arg(long)]
        sum: bool,
    },

    /// Run a statement against an SQLite database
    Sql {
        /// Database file
        database: PathBuf,

        /// SQL text
        query: String,

        /// Positional parameters, bound as text
        #[arg(long = "param")]
        params: Vec<String>,

        /// Open the database read-only
        #[arg(long)]
        readonly: bool,

        /// Stop after this many rows
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Print capability reports for the built-in cursors
    Inspect,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range_with_negative_bounds() {
        let cli = Cli::try_parse_from(["qolor", "range", "-5", "5", "--step", "-1"]).unwrap();
        match cli.command {
            Commands::Range { from, to, step, .. } => {
                assert_eq!((from.as_str(), to.as_str()), ("-5", "5"));
                assert_eq!(step.as_deref(), Some("-1"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_csv_fields_and_global_format() {
        let cli = Cli::try_parse_from(["qolor", "csv", "quotes.csv", "--fields", "0,2", "--format", "json"])
            .unwrap();
        assert_eq!(cli.format, Some(Format::Json));
        match cli.command {
            Commands::Csv { fields, header, .. } => {
                assert_eq!(fields, vec![0, 2]);
                assert!(!header);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_sql_params() {
        let cli = Cli::try_parse_from(["qolor", "sql", "test.db", "SELECT ?1", "--param", "x", "--readonly"])
            .unwrap();
        match cli.command {
            Commands::Sql { params, readonly, .. } => {
                assert_eq!(params, vec!["x"]);
                assert!(readonly);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_verify_command() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
