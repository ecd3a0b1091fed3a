//! Museum bonus calculator entry point.
mod commands;
mod config;
mod dirs;
mod logging;
mod reporter;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use commands::{Calc, Modifiers, Ores, Validate};
use config::CliConfig;

/// Museum bonus calculator
#[derive(Parser)]
#[command(name = "museum")]
#[command(about = "Compute museum stat bonuses from ore and modifier layouts", long_about = None)]
#[command(version)]
struct Cli {
    /// Also write logs to the platform cache directory
    /// (ignored when MUSEUM_LOG_DIR is set)
    #[arg(long, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Compute the bonuses of a museum layout
    Calc(Calc),

    /// List the ore catalog
    Ores(Ores),

    /// List the modifier catalog
    Modifiers(Modifiers),

    /// Check that a data directory loads and validates
    Validate(Validate),
}

fn main() -> ExitCode {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = CliConfig::from_env();

    let log_dir = match (&config.log_dir, cli.log_file) {
        (Some(dir), _) => Some(dir.clone()),
        (None, true) => Some(dirs::log_dir()),
        (None, false) => None,
    };
    let _guard = match logging::init(log_dir.as_deref()) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("failed to initialize logging: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let reporter = match reporter::ErrorReporter::new(config.reporter).install() {
        Ok(reporter) => reporter,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            reporter.report(format_args!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, config: &CliConfig) -> Result<()> {
    match command {
        Command::Calc(cmd) => cmd.execute(config),
        Command::Ores(cmd) => cmd.execute(config),
        Command::Modifiers(cmd) => cmd.execute(config),
        Command::Validate(cmd) => cmd.execute(config),
    }
}
