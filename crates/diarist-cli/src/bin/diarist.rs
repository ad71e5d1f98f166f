//! Diarist Binary Entry Point

use clap::Parser;
use diarist_cli::{run_command, Cli, Outcome};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut stdout = std::io::stdout().lock();
    match run_command(cli, &mut stdout)? {
        Outcome::Ran => Ok(ExitCode::SUCCESS),
        Outcome::MissingDirectory(dir) => {
            eprintln!("❌ journal directory not found: {}", dir.display());
            Ok(ExitCode::from(2))
        }
    }
}
