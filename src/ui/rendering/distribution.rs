//! Guess distribution rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{registration::RegistrationClient, storage::KeyValueStore, ui::app::App};

/// Columns taken by the "N " label and the count after the bar.
const LABEL_WIDTH: usize = 3;
const COUNT_WIDTH: usize = 6;

impl<S: KeyValueStore + Clone, C: RegistrationClient> App<S, C> {
    pub(in crate::ui) fn draw_distribution(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Guess Distribution");

        if self.session.stats().is_empty() {
            let text = vec![Line::from(Span::styled(
                "No data",
                Style::default().fg(Color::DarkGray),
            ))];
            f.render_widget(Paragraph::new(text).block(block), area);
            return;
        }

        let max_width = (area.width.saturating_sub(2) as usize)
            .saturating_sub(LABEL_WIDTH + COUNT_WIDTH)
            .max(1);

        let lines: Vec<Line> = self
            .session
            .histogram()
            .iter()
            .map(|bar| {
                let color = if bar.is_highlighted {
                    Color::Green
                } else {
                    Color::DarkGray
                };

                // Keep a sliver visible for empty buckets.
                let width = bar.width(max_width).max(1);

                Line::from(vec![
                    Span::raw(format!("{:<width$}", bar.guesses, width = LABEL_WIDTH)),
                    Span::styled("█".repeat(width), Style::default().fg(color)),
                    Span::styled(
                        format!(" {}", bar.count),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ])
            })
            .collect();

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
