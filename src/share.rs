//! Emoji grid encoding of a finished game.

use crate::evaluation::{GuessRow, LetterStatus};

pub const DEFAULT_GAME_TITLE: &str = "Wordle";

const CORRECT: char = '🟩';
const CORRECT_HIGH_CONTRAST: char = '🟧';
const PRESENT: char = '🟨';
const PRESENT_HIGH_CONTRAST: char = '🟦';
const ABSENT_DARK: char = '⬛';
const ABSENT_LIGHT: char = '⬜';

const LOSS_MARKER: &str = "X";
const HARD_MODE_MARKER: &str = "*";

/// Display settings that change the shared text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShareFlags {
    pub hard_mode: bool,
    pub dark_mode: bool,
    pub high_contrast: bool,
}

/// Glyph for a single letter evaluation.
pub fn glyph(status: LetterStatus, flags: ShareFlags) -> char {
    match status {
        LetterStatus::Correct if flags.high_contrast => CORRECT_HIGH_CONTRAST,
        LetterStatus::Correct => CORRECT,
        LetterStatus::Present if flags.high_contrast => PRESENT_HIGH_CONTRAST,
        LetterStatus::Present => PRESENT,
        LetterStatus::Absent if flags.dark_mode => ABSENT_DARK,
        LetterStatus::Absent => ABSENT_LIGHT,
    }
}

/// Builds the shareable text for a finished game.
#[derive(Debug, Clone)]
pub struct ShareEncoder {
    title: String,
    max_guesses: usize,
}

impl ShareEncoder {
    pub fn new(title: impl Into<String>, max_guesses: usize) -> Self {
        Self {
            title: title.into(),
            max_guesses,
        }
    }

    /// Header line, blank line, then one glyph row per guess.
    pub fn encode(&self, guesses: &[GuessRow], did_lose: bool, flags: ShareFlags) -> String {
        let grid: Vec<String> = guesses
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&status| glyph(status, flags))
                    .collect::<String>()
            })
            .collect();

        format!("{}\n\n{}", self.header(guesses.len(), did_lose, flags), grid.join("\n"))
    }

    fn header(&self, guesses_used: usize, did_lose: bool, flags: ShareFlags) -> String {
        let attempts = if did_lose {
            LOSS_MARKER.to_string()
        } else {
            guesses_used.to_string()
        };
        let hard = if flags.hard_mode { HARD_MODE_MARKER } else { "" };

        format!("{} {}/{}{}", self.title, attempts, self.max_guesses, hard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::parse_pattern;

    fn rows(patterns: &[&str]) -> Vec<GuessRow> {
        patterns.iter().map(|p| parse_pattern(p).unwrap()).collect()
    }

    fn encoder() -> ShareEncoder {
        ShareEncoder::new("Wordle", 6)
    }

    #[test]
    fn test_win_on_fourth_guess() {
        let game = rows(&["XXYXX", "YXXGX", "GGXGX", "GGGGG"]);
        let text = encoder().encode(&game, false, ShareFlags::default());

        assert_eq!(
            text,
            "Wordle 4/6\n\n⬜⬜🟨⬜⬜\n🟨⬜⬜🟩⬜\n🟩🟩⬜🟩⬜\n🟩🟩🟩🟩🟩"
        );
    }

    #[test]
    fn test_loss_uses_marker_regardless_of_rows() {
        let short = encoder().encode(&rows(&["XXXXX"]), true, ShareFlags::default());
        let full = encoder().encode(&rows(&["XXXXX"; 6]), true, ShareFlags::default());

        assert!(short.starts_with("Wordle X/6\n\n"));
        assert!(full.starts_with("Wordle X/6\n\n"));
    }

    #[test]
    fn test_hard_mode_suffix() {
        let flags = ShareFlags {
            hard_mode: true,
            ..Default::default()
        };
        let text = encoder().encode(&rows(&["GGGGG"]), false, flags);
        assert_eq!(text, "Wordle 1/6*\n\n🟩🟩🟩🟩🟩");

        let lost = encoder().encode(&rows(&["XXXXX"]), true, flags);
        assert!(lost.starts_with("Wordle X/6*"));
    }

    #[test]
    fn test_high_contrast_changes_hits_not_misses() {
        let flags = ShareFlags {
            high_contrast: true,
            ..Default::default()
        };
        assert_eq!(glyph(LetterStatus::Correct, flags), '🟧');
        assert_eq!(glyph(LetterStatus::Present, flags), '🟦');
        assert_eq!(glyph(LetterStatus::Absent, flags), '⬜');
    }

    #[test]
    fn test_dark_mode_changes_misses_only() {
        let flags = ShareFlags {
            dark_mode: true,
            ..Default::default()
        };
        assert_eq!(glyph(LetterStatus::Correct, flags), '🟩');
        assert_eq!(glyph(LetterStatus::Present, flags), '🟨');
        assert_eq!(glyph(LetterStatus::Absent, flags), '⬛');

        let both = ShareFlags {
            dark_mode: true,
            high_contrast: true,
            ..Default::default()
        };
        assert_eq!(glyph(LetterStatus::Absent, both), '⬛');
        assert_eq!(glyph(LetterStatus::Correct, both), '🟧');
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let game = rows(&["YXXGX", "GGGGG"]);
        let flags = ShareFlags {
            hard_mode: true,
            dark_mode: true,
            high_contrast: false,
        };

        let first = encoder().encode(&game, false, flags);
        let second = encoder().encode(&game, false, flags);
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_title_and_limit() {
        let text =
            ShareEncoder::new("Not Wordle", 8).encode(&rows(&["GG"]), false, ShareFlags::default());
        assert_eq!(text, "Not Wordle 1/8\n\n🟩🟩");
    }
}
