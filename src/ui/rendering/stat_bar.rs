use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{registration::RegistrationClient, storage::KeyValueStore, ui::app::App};

impl<S: KeyValueStore + Clone, C: RegistrationClient> App<S, C> {
    /// Headline numbers: played, win %, current and best streak.
    pub(in crate::ui) fn draw_stat_bar(&self, f: &mut Frame, area: Rect) {
        let stats = self.session.stats();

        let block = Block::default().borders(Borders::ALL).title("Statistics");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let cells = [
            (stats.games_played.to_string(), "Played"),
            (stats.success_rate().to_string(), "Win %"),
            (stats.current_streak.to_string(), "Current Streak"),
            (stats.max_streak.to_string(), "Max Streak"),
        ];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(inner);

        for ((value, label), column) in cells.into_iter().zip(columns.iter()) {
            let lines = vec![
                Line::from(Span::styled(
                    value,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
                .centered(),
                Line::from(label).centered(),
            ];
            f.render_widget(Paragraph::new(lines), *column);
        }
    }
}
