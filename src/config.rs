//! Runtime configuration for the terminal game.
//!
//! Values come from `TUI_2048_*` environment variables and may be overridden
//! on the command line.

use std::path::PathBuf;

use clap::Parser;

use crate::types::DEFAULT_SAVE_PATH;

pub const ENV_SAVE_PATH: &str = "TUI_2048_SAVE_PATH";
pub const ENV_SEED: &str = "TUI_2048_SEED";
pub const ENV_LOG_PATH: &str = "TUI_2048_LOG_PATH";
pub const ENV_LOG: &str = "TUI_2048_LOG";

pub const DEFAULT_LOG_FILTER: &str = "info";

/// Command-line flags. Anything left unset falls back to the environment.
#[derive(Parser, Debug, Default)]
#[command(name = "tui-2048", version, about = "Play 2048 in the terminal")]
pub struct Cli {
    /// Board file used by save (f) and load (g)
    #[arg(long, value_name = "FILE")]
    pub save_path: Option<PathBuf>,

    /// Seed for tile placement; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file
    #[arg(long, value_name = "FILE")]
    pub log_path: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `tui_2048_core=trace`
    #[arg(long)]
    pub log: Option<String>,

    /// Print the starting board as text and exit
    #[arg(long)]
    pub dump: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub save_path: PathBuf,
    pub seed: Option<u64>,
    /// Raw `TUI_2048_SEED` value that did not parse as a `u64`.
    pub invalid_seed: Option<String>,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
    pub dump: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            seed: None,
            invalid_seed: None,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            dump: false,
        }
    }
}

impl GameConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let defaults = Self::default();
        let (seed, invalid_seed) = match var(ENV_SEED) {
            Some(raw) => match raw.parse() {
                Ok(seed) => (Some(seed), None),
                Err(_) => (None, Some(raw)),
            },
            None => (None, None),
        };
        Self {
            save_path: var(ENV_SAVE_PATH)
                .map(PathBuf::from)
                .unwrap_or(defaults.save_path),
            seed,
            invalid_seed,
            log_path: var(ENV_LOG_PATH).map(PathBuf::from),
            log_filter: var(ENV_LOG).unwrap_or(defaults.log_filter),
            dump: false,
        }
    }

    /// Layer command-line flags over this configuration.
    pub fn apply_args(mut self, cli: Cli) -> Self {
        if let Some(path) = cli.save_path {
            self.save_path = path;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
            self.invalid_seed = None;
        }
        if cli.log_path.is_some() {
            self.log_path = cli.log_path;
        }
        if let Some(filter) = cli.log {
            self.log_filter = filter;
        }
        self.dump = cli.dump;
        self
    }

    /// Message for a seed that was set but ignored, if any.
    pub fn seed_warning(&self) -> Option<String> {
        self.invalid_seed
            .as_ref()
            .map(|raw| format!("Ignoring {ENV_SEED}={raw:?}: not an integer, using a random seed"))
    }

    /// Environment first, then command-line flags.
    pub fn load(cli: Cli) -> Self {
        Self::from_env().apply_args(cli)
    }
}
