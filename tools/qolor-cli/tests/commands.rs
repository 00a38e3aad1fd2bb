///
/// Integration tests for the qolor CLI.
///
/// Tests cover:
/// - csv: text and JSON output, header keys, field projection and limits
/// - range: integer filters and sums, float ranges, argument errors
/// - sql: rows as text and JSON, parameters, statements without rows
/// - inspect: the capability report sections
/// - Config values feeding commands, with flags taking precedence
///

use std::fs;
use std::path::Path;

use clap::Parser;
use qolor_cli::{Cli, CliError, Config, config::parse_config_str, run};
use tempfile::TempDir;

fn exec(args: &[&str], config: &Config) -> Result<String, CliError> {
    let mut argv = vec!["qolor"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).unwrap();
    let mut out = Vec::new();
    run(cli, config, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn write(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path.display().to_string()
}

const QUOTES: &str = "symbol,price,change\n\"LU\",86.25,+4.0625\n\"T\",61.125,-0.1875\n\"MSFT\",98.625,+0.5625\n";

#[test]
fn test_csv_text_projection() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "quotes.csv", QUOTES);
    let out = exec(&["csv", &file, "--fields", "0,2", "--header", "--limit", "2"], &Config::default()).unwrap();
    assert_eq!(out, "symbol\tchange\nLU\t+4.0625\nT\t-0.1875\n");
}

#[test]
fn test_csv_json_with_header() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "quotes.csv", QUOTES);
    let out = exec(&["csv", &file, "--header", "--format", "json"], &Config::default()).unwrap();
    let records: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[2]["symbol"], "MSFT");
    assert_eq!(records[0]["price"], "86.25");
}

#[test]
fn test_csv_separators_from_config() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "data.txt", "a;b\nc;d\n");
    let config = parse_config_str("[csv]\nseparators = \";\"").unwrap();
    assert_eq!(exec(&["csv", &file], &config).unwrap(), "a\tb\nc\td\n");
    assert_eq!(exec(&["csv", &file, "--separators", ","], &config).unwrap(), "a;b\nc;d\n");
}

#[test]
fn test_csv_missing_file() {
    let err = exec(&["csv", "/nonexistent/quotes.csv"], &Config::default()).unwrap_err();
    assert!(matches!(err, CliError::Io { .. }));
}

#[test]
fn test_range_multiples_sum() {
    let out = exec(&["range", "1", "1000", "--multiples-of", "3,5", "--sum"], &Config::default()).unwrap();
    assert_eq!(out, "233168\n");
}

#[test]
fn test_range_descending_values() {
    let out = exec(&["range", "5", "0", "--step", "-2"], &Config::default()).unwrap();
    assert_eq!(out, "5\n3\n1\n");
}

#[test]
fn test_range_float_json() {
    let config = parse_config_str("[output]\nformat = \"json\"").unwrap();
    let out = exec(&["range", "0", "1", "--step", "0.25", "--inclusive"], &config).unwrap();
    let values: Vec<f64> = serde_json::from_str(&out).unwrap();
    assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
}

#[test]
fn test_range_rejects_bad_input() {
    let err = exec(&["range", "0", "ten"], &Config::default()).unwrap_err();
    assert!(matches!(err, CliError::InvalidArgument(_)));
    let err = exec(&["range", "0", "1", "--step", "0.5", "--multiples-of", "2"], &Config::default()).unwrap_err();
    assert!(matches!(err, CliError::InvalidArgument(_)));
}

fn contacts_db(dir: &TempDir) -> String {
    let path = dir.path().join("test.db");
    let db = qolor_sqlite3::Database::open(&path).unwrap();
    db.execute(
        "CREATE TABLE contacts (id INTEGER PRIMARY KEY, name TEXT, phone TEXT);
         INSERT INTO contacts (name, phone) VALUES ('AAAA', '1234'), ('BBBB', NULL);",
    )
    .unwrap();
    path.display().to_string()
}

#[test]
fn test_sql_text_rows() {
    let dir = TempDir::new().unwrap();
    let db = contacts_db(&dir);
    let out = exec(&["sql", &db, "SELECT id, name, phone FROM contacts ORDER BY id"], &Config::default()).unwrap();
    assert_eq!(out, "id\tname\tphone\n1\tAAAA\t1234\n2\tBBBB\t\n");
}

#[test]
fn test_sql_json_with_param() {
    let dir = TempDir::new().unwrap();
    let db = contacts_db(&dir);
    let out = exec(
        &["sql", &db, "SELECT id, phone FROM contacts WHERE name = ?1", "--param", "BBBB", "--format", "json"],
        &Config::default(),
    )
    .unwrap();
    let rows: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
    assert_eq!(rows, vec![serde_json::json!({ "id": 2, "phone": null })]);
}

#[test]
fn test_sql_statement_reports_changes() {
    let dir = TempDir::new().unwrap();
    let db = contacts_db(&dir);
    let out = exec(&["sql", &db, "UPDATE contacts SET phone = '0000'"], &Config::default()).unwrap();
    assert_eq!(out, "2 row(s) changed\n");
}

#[test]
fn test_sql_readonly_rejects_writes() {
    let dir = TempDir::new().unwrap();
    let db = contacts_db(&dir);
    let err = exec(&["sql", &db, "DELETE FROM contacts", "--readonly"], &Config::default()).unwrap_err();
    assert!(matches!(err, CliError::Db(_)));
    assert!(Path::new(&db).exists());
}

#[test]
fn test_inspect_sections() {
    let out = exec(&["inspect"], &Config::default()).unwrap();
    assert!(out.contains("================= slice ================="));
    assert!(out.contains("category: random_access"));
    assert!(out.contains("================= sqlite rows ================="));
    assert!(out.contains("iteration: 3 5 6 9 10 12 15 18"));
    assert!(out.contains("value: 78"));
}
