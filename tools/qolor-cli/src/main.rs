///
/// qolor - command-line entry point
///
/// Parses arguments, loads the config, installs the stderr log subscriber
/// and dispatches to the subcommand.
///

use clap::Parser;

use qolor_cli::{Cli, config, log_level, run};

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    let dir = std::env::current_dir().unwrap_or_default();
    let config = config::discover_config(cli.config.as_deref(), &dir)?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_max_level(log_level(&cli, &config)?)
        .init();

    let stdout = std::io::stdout();
    run(cli, &config, &mut stdout.lock())?;
    Ok(())
}
