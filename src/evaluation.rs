use anyhow::{Result, bail};
use std::convert::TryFrom;

use crate::stats::GameOutcome;

/// Per-letter evaluation of a guess against the answer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LetterStatus {
    Correct,
    Present,
    Absent,
}

impl TryFrom<char> for LetterStatus {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_uppercase() {
            'G' => Ok(LetterStatus::Correct),
            'Y' => Ok(LetterStatus::Present),
            'X' => Ok(LetterStatus::Absent),
            _ => Err(value),
        }
    }
}

/// Evaluations for one guess, one entry per letter.
pub type GuessRow = Vec<LetterStatus>;

pub fn parse_pattern(pattern: &str) -> Result<GuessRow> {
    pattern
        .chars()
        .map(|c| {
            LetterStatus::try_from(c)
                .map_err(|bad| anyhow::anyhow!("invalid pattern character: {}", bad))
        })
        .collect()
}

/// A completed game: the evaluated rows plus how it ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedGame {
    rows: Vec<GuessRow>,
    outcome: GameOutcome,
}

impl FinishedGame {
    /// Build a finished game. A win is scored by the number of rows used.
    pub fn new(rows: Vec<GuessRow>, did_lose: bool, max_guesses: usize) -> Result<Self> {
        if rows.is_empty() {
            bail!("a finished game needs at least one guess");
        }
        if rows.len() > max_guesses {
            bail!("{} guesses exceed the limit of {}", rows.len(), max_guesses);
        }

        let outcome = if did_lose {
            GameOutcome::Lost
        } else {
            GameOutcome::Won {
                guesses: rows.len(),
            }
        };

        Ok(Self { rows, outcome })
    }

    /// Parse one `G/Y/X` pattern per row.
    pub fn from_patterns<S: AsRef<str>>(
        patterns: &[S],
        did_lose: bool,
        max_guesses: usize,
    ) -> Result<Self> {
        let rows = patterns
            .iter()
            .map(|p| parse_pattern(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Self::new(rows, did_lose, max_guesses)
    }

    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn did_lose(&self) -> bool {
        matches!(self.outcome, GameOutcome::Lost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pattern_mixed_case() {
        let row = parse_pattern("gYx").unwrap();
        assert_eq!(
            row,
            vec![
                LetterStatus::Correct,
                LetterStatus::Present,
                LetterStatus::Absent
            ]
        );
    }

    #[test]
    fn test_parse_pattern_rejects_unknown_char() {
        assert!(parse_pattern("GGZGG").is_err());
    }

    #[test]
    fn test_finished_game_win_counts_rows() {
        let game = FinishedGame::from_patterns(&["XYXXX", "GGXYX", "GGGGG"], false, 6).unwrap();
        assert_eq!(game.outcome(), GameOutcome::Won { guesses: 3 });
        assert!(!game.did_lose());
        assert_eq!(game.rows().len(), 3);
    }

    #[test]
    fn test_finished_game_loss() {
        let game = FinishedGame::from_patterns(&["XXXXX"; 6], true, 6).unwrap();
        assert_eq!(game.outcome(), GameOutcome::Lost);
    }

    #[test]
    fn test_finished_game_rejects_empty_and_too_many_rows() {
        let empty: [&str; 0] = [];
        assert!(FinishedGame::from_patterns(&empty, false, 6).is_err());
        assert!(FinishedGame::from_patterns(&["GGGGG"; 7], false, 6).is_err());
    }
}
