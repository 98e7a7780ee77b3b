//! CLI entry point.

use std::path::PathBuf;

use bitty_splitter::cli::{self, Cli, Outcome, USAGE_EXIT_CODE};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // -v / -vv pick the default level; RUST_LOG still wins when set.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_target(false)
        .init();

    let home = std::env::var_os("HOME").map(PathBuf::from);

    match cli::run(&cli, home.as_deref()) {
        Ok(Outcome::Usage) => {
            println!("{}", Cli::usage());
            std::process::exit(USAGE_EXIT_CODE);
        }
        Ok(Outcome::Completed(report)) => {
            for (path, err) in &report.failed {
                eprintln!("Skipped {}: {err}", path.display());
            }
            if !report.is_success() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
