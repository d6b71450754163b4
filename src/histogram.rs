//! Guess distribution bar geometry.

use crate::stats::{GameOutcome, GameStats};

/// One bucket of the guess distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBar {
    /// Guess count this bar stands for (1-based).
    pub guesses: usize,
    pub count: u32,
    /// Length relative to the tallest bar, in `0.0..=1.0`.
    pub ratio: f64,
    pub is_highlighted: bool,
}

impl HistogramBar {
    /// Scale the bar to at most `max_width` cells.
    pub fn width(&self, max_width: usize) -> usize {
        (self.ratio * max_width as f64).round() as usize
    }
}

/// Bucket index to highlight for the game that just ended.
pub fn highlight_for(outcome: GameOutcome) -> Option<usize> {
    match outcome {
        GameOutcome::Won { guesses } if guesses > 0 => Some(guesses - 1),
        _ => None,
    }
}

/// Compute one bar per allowed guess count.
///
/// `highlight` is the 0-based bucket of the just-completed win, if any.
pub fn compute(stats: &GameStats, highlight: Option<usize>) -> Vec<HistogramBar> {
    let peak = stats.win_distribution.iter().copied().max().unwrap_or(0).max(1);

    stats
        .win_distribution
        .iter()
        .enumerate()
        .map(|(i, &count)| HistogramBar {
            guesses: i + 1,
            count,
            ratio: count as f64 / peak as f64,
            is_highlighted: highlight == Some(i),
        })
        .collect()
}
