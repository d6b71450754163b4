use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::{
    registration::DEFAULT_REGISTRATION_URL, share::DEFAULT_GAME_TITLE, stats::DEFAULT_MAX_GUESSES,
};

#[derive(Parser, Debug)]
#[command(name = "wordle-stats", version, about = "Statistics and sharing for a daily word game")]
pub struct Args {
    /// Directory holding the database and logs
    #[arg(long, env = "WORDLE_STATS_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Endpoint receiving registrations
    #[arg(
        long,
        env = "WORDLE_STATS_REGISTRATION_URL",
        default_value = DEFAULT_REGISTRATION_URL,
        global = true
    )]
    pub registration_url: String,

    /// Game name shown in the share header
    #[arg(long, default_value = DEFAULT_GAME_TITLE, global = true)]
    pub title: String,

    /// Maximum guesses per game
    #[arg(long, default_value_t = DEFAULT_MAX_GUESSES, global = true)]
    pub max_guesses: usize,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the statistics view
    Stats,
    /// Record a finished game and open the statistics view
    Finish(GameArgs),
    /// Encode a finished game and share it
    Share(GameArgs),
    /// Register to unlock unlimited play
    Register {
        #[arg(long)]
        email: String,
        /// First and last name
        #[arg(long)]
        name: String,
    },
}

#[derive(clap::Args, Debug, Clone)]
pub struct GameArgs {
    /// Repeated guess evaluations, one per guess: G (correct), Y (present), X (absent)
    #[arg(long = "row", value_name = "PATTERN", required = true)]
    pub rows: Vec<String>,

    /// The game was lost
    #[arg(long)]
    pub lost: bool,

    #[arg(long)]
    pub hard: bool,

    #[arg(long)]
    pub dark: bool,

    #[arg(long)]
    pub high_contrast: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_finish_command() {
        let args = Args::try_parse_from([
            "wordle-stats",
            "finish",
            "--row",
            "XYXXX",
            "--row",
            "GGGGG",
            "--hard",
        ])
        .unwrap();

        match args.command {
            Some(Command::Finish(game)) => {
                assert_eq!(game.rows, vec!["XYXXX", "GGGGG"]);
                assert!(game.hard);
                assert!(!game.lost);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(args.max_guesses, 6);
    }

    #[test]
    fn test_share_requires_rows() {
        assert!(Args::try_parse_from(["wordle-stats", "share", "--lost"]).is_err());
    }

    #[test]
    fn test_default_command_is_none() {
        let args = Args::try_parse_from(["wordle-stats"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.title, "Wordle");
    }
}
