pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "caliope",
    about = "Caliope operator CLI",
    long_about = "Inspect Caliope configuration, run readiness checks, and summarize the seed catalog.",
    after_help = "Examples:\n  caliope doctor --json\n  caliope config\n  caliope catalog"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(
        about = "Inspect effective configuration values with source attribution"
    )]
    Config,
    #[command(about = "Validate config, the loyalty tier table, and seed catalog integrity")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Summarize the seed catalog and return structured status output")]
    Catalog,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
        Command::Doctor { json } => {
            commands::CommandResult { exit_code: 0, output: commands::doctor::run(json) }
        }
        Command::Catalog => commands::catalog::run(),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
