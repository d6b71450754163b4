//! Modal notice for gate rejections.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::{registration::RegistrationClient, storage::KeyValueStore, ui::app::App};

const DISMISS_HINT: &str = "Press any key";
const MIN_WIDTH: u16 = 30;

impl<S: KeyValueStore + Clone, C: RegistrationClient> App<S, C> {
    pub(in crate::ui) fn draw_notice(&self, f: &mut Frame, message: &str) {
        let screen = f.area();

        let width = ((screen.width as u32 * 6 / 10) as u16)
            .max(MIN_WIDTH)
            .min(screen.width);
        let inner_width = width.saturating_sub(2).max(1) as usize;

        // Message rows, a spacer and the hint, inside the borders.
        let height = (wrapped_rows(message, inner_width) + 4).min(screen.height as usize) as u16;

        let [row] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(screen);
        let [area] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(row);

        let lines = vec![
            Line::from(message).centered(),
            Line::from(""),
            Line::from(DISMISS_HINT).centered(),
        ];

        f.render_widget(Clear, area);
        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(Color::Yellow))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("Notice")
                        .title_style(Style::default().add_modifier(Modifier::BOLD)),
                ),
            area,
        );
    }
}

/// Rows `text` takes when word-wrapped to `width` columns.
fn wrapped_rows(text: &str, width: usize) -> usize {
    let mut rows = 1;
    let mut used = 0;

    for word in text.split_whitespace() {
        let len = word.chars().count();
        if used == 0 {
            // Overlong words are broken across rows.
            rows += len.saturating_sub(1) / width;
            used = len % width;
            if used == 0 && len > 0 {
                used = width;
            }
        } else if used + 1 + len <= width {
            used += 1 + len;
        } else {
            rows += 1;
            rows += len.saturating_sub(1) / width;
            used = len % width;
            if used == 0 {
                used = width;
            }
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::wrapped_rows;

    #[test]
    fn test_wrapped_rows() {
        assert_eq!(wrapped_rows("", 10), 1);
        assert_eq!(wrapped_rows("short", 10), 1);
        assert_eq!(wrapped_rows("exactly ten", 11), 1);
        assert_eq!(
            wrapped_rows("Please enter your details to have unlimited goes", 46),
            2
        );
        assert_eq!(wrapped_rows("aaaaaaaaaaaaaaaaaaaaaaaaa", 10), 3);
    }
}
