use anyhow::{Context, Result, ensure};
use std::path::PathBuf;

use crate::args::Args;

const APP_DIR: &str = "wordle-stats";
/// Upper bound on `--max-guesses`; the view sizes its panels from it.
pub const MAX_GUESS_LIMIT: usize = 32;

/// Runtime settings resolved from the command line and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub registration_url: String,
    pub game_title: String,
    pub max_guesses: usize,
}

impl Config {
    pub fn from_args(args: &Args) -> Result<Self> {
        ensure!(
            (1..=MAX_GUESS_LIMIT).contains(&args.max_guesses),
            "--max-guesses must be between 1 and {}",
            MAX_GUESS_LIMIT
        );

        let data_dir = match &args.data_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_dir()
                .context("Unable to determine data directory for your platform")?
                .join(APP_DIR),
        };

        Ok(Self {
            data_dir,
            registration_url: args.registration_url.clone(),
            game_title: args.title.clone(),
            max_guesses: args.max_guesses,
        })
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}
