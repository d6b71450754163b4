mod distribution;
mod footer;
mod gate_panel;
mod logs;
mod notice;
mod stat_bar;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{registration::RegistrationClient, storage::KeyValueStore, ui::app::App};

impl<S: KeyValueStore + Clone, C: RegistrationClient> App<S, C> {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let max_guesses = self.session.stats().max_guesses() as u16;

        // The form only makes sense once there is something to gate.
        let show_gate = !self.session.stats().is_empty();

        let mut constraints = vec![Constraint::Length(4)];
        if show_gate {
            constraints.push(Constraint::Length(9));
        }
        constraints.extend([
            Constraint::Length(max_guesses + 2),
            Constraint::Length(4),
            Constraint::Min(4), // logs panel
        ]);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(f.area());

        let mut areas = layout.iter().copied();
        let mut next = || areas.next().unwrap_or_default();

        self.draw_stat_bar(f, next());
        if show_gate {
            self.draw_gate_panel(f, next());
        }
        self.draw_distribution(f, next());
        self.draw_footer(f, next());
        self.draw_logs(f, next());

        if let Some(notice) = &self.notice {
            self.draw_notice(f, notice);
        }
    }
}
