//! Command-line interface.

use std::path::{Path, PathBuf};

use clap::{ArgAction, CommandFactory, Parser};

use crate::batch::{run_batch, BatchOptions, BatchReport};
use crate::config::Config;
use crate::error::SplitterResult;

/// Exit code used when help is requested or the directories are not configured.
pub const USAGE_EXIT_CODE: i32 = 2;

/// Config file location relative to the home directory.
pub const DEFAULT_CONFIG_PATH: &str = ".config/bittysplitter/conf.toml";

/// Split CSV files into per-split output files using pattern-matched rules.
#[derive(Debug, Parser)]
#[command(name = "bitty-splitter", version, about, disable_help_flag = true)]
pub struct Cli {
    /// Print usage and exit
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Log verbosity: -v for info, -vv for debug
    #[arg(short, action = ArgAction::Count)]
    pub verbose: u8,

    /// Directory holding the input files (overrides `inputdir` in the config)
    #[arg(short, long = "inputdir")]
    pub inputdir: Option<PathBuf>,

    /// Directory receiving `<split>/<file>` outputs (overrides `outputdir` in the config)
    #[arg(short, long = "outputdir")]
    pub outputdir: Option<PathBuf>,

    /// Config file (default: ~/.config/bittysplitter/conf.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// What a CLI invocation ended with.
#[derive(Debug)]
pub enum Outcome {
    /// Usage was printed; exit with [`USAGE_EXIT_CODE`].
    Usage,
    /// The batch ran.
    Completed(BatchReport),
}

impl Cli {
    /// Default log filter for the given `-v` count.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    /// Usage text printed for `-h` or missing directories.
    pub fn usage() -> String {
        Cli::command().render_help().to_string()
    }
}

/// Config path to read: the explicit one, else the default under `home`.
pub fn resolve_config_path(explicit: Option<&Path>, home: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => home.map(|home| home.join(DEFAULT_CONFIG_PATH)),
    }
}

/// Load the config, tolerating a missing default file but not a missing explicit one.
fn load_config(cli: &Cli, home: Option<&Path>) -> SplitterResult<Config> {
    match resolve_config_path(cli.config.as_deref(), home) {
        Some(path) if cli.config.is_some() || path.is_file() => Config::from_path(path),
        Some(path) => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Config::default())
        }
        None => Ok(Config::default()),
    }
}

/// Run the CLI with already-parsed arguments.
///
/// `home` is the user's home directory, used to locate the default config file.
pub fn run(cli: &Cli, home: Option<&Path>) -> SplitterResult<Outcome> {
    if cli.help {
        return Ok(Outcome::Usage);
    }

    let config =
        load_config(cli, home)?.with_overrides(cli.inputdir.clone(), cli.outputdir.clone());
    let rules = config.rule_set()?;
    tracing::debug!(rules = ?rules, "regex patterns");

    let Some((input_dir, output_dir)) = config.directories() else {
        return Ok(Outcome::Usage);
    };

    let report = run_batch(input_dir, output_dir, &rules, &BatchOptions::default())?;
    Ok(Outcome::Completed(report))
}
