//! Registration form rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    gate::FlightState,
    registration::RegistrationClient,
    storage::KeyValueStore,
    ui::{app::App, types::FormField},
};

const PROMPT: &str = "Enter your details to have unlimited goes. By entering you agree to hear \
                      from StepLadder about apprenticeships and career opportunities.";

impl<S: KeyValueStore + Clone, C: RegistrationClient> App<S, C> {
    pub(in crate::ui) fn draw_gate_panel(&self, f: &mut Frame, area: Rect) {
        let gate = self.session.gate();
        let block = Block::default().borders(Borders::ALL).title("Unlimited Play");

        if gate.is_unlocked() {
            let mut lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Unlimited play unlocked | Ctrl+R: Play again",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
            ];
            if gate.flight_state() == FlightState::InFlight {
                lines.push(Line::from(Span::styled(
                    "Submitting..",
                    Style::default().fg(Color::Yellow),
                )));
            }

            f.render_widget(Paragraph::new(lines).block(block), area);
            return;
        }

        let lines = vec![
            Line::from(PROMPT),
            Line::from(""),
            self.field_line("Full Name", &self.full_name, FormField::FullName),
            self.field_line("Email", &self.email, FormField::Email),
            Line::from(""),
            Line::from(Span::styled(
                "Tab: Switch field | Enter: Submit",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(block),
            area,
        );
    }

    fn field_line<'a>(&self, label: &'a str, value: &'a str, field: FormField) -> Line<'a> {
        let focused = self.focus == field;

        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let mut spans = vec![
            Span::styled(format!("{:<11}", format!("{}:", label)), label_style),
            Span::raw(value),
        ];
        if focused {
            spans.push(Span::styled("▌", Style::default().fg(Color::Yellow)));
        }

        Line::from(spans)
    }
}
