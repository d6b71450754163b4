use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    delivery::ShareOutcome, registration::RegistrationClient, storage::KeyValueStore, ui::app::App,
};

impl<S: KeyValueStore + Clone, C: RegistrationClient> App<S, C> {
    /// Share feedback and key help.
    pub(in crate::ui) fn draw_footer(&self, f: &mut Frame, area: Rect) {
        let share_line = match (self.session.current_game(), self.share_outcome) {
            (None, _) => Line::from(Span::styled(
                "No finished game to share",
                Style::default().fg(Color::DarkGray),
            )),
            (Some(_), None) => Line::from("Ctrl+S: Share your result"),
            (Some(_), Some(outcome)) => {
                let color = match outcome {
                    ShareOutcome::Failed => Color::Red,
                    ShareOutcome::Shared | ShareOutcome::Copied => Color::Green,
                };
                Line::from(Span::styled(outcome.message(), Style::default().fg(color)))
            }
        };

        let keys = if self.session.gate().is_unlocked() {
            "Esc: Close | Ctrl+R: Play again | Ctrl+Q: Quit"
        } else if self.session.stats().is_empty() {
            "Esc: Close | Ctrl+Q: Quit"
        } else {
            // Quitting ends the process; the gate and stored flag are untouched.
            "Esc: Close | Ctrl+Q: Quit app (play stays locked)"
        };

        let lines = vec![
            share_line,
            Line::from(Span::styled(keys, Style::default().fg(Color::DarkGray))),
        ];

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
            area,
        );
    }
}
