//! Keyboard input dispatch.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{registration::RegistrationClient, storage::KeyValueStore};

use super::super::{
    app::App,
    types::{ExitReason, FormField},
};
use super::{GateHandler, ShareHandler};

/// Helper struct for managing keyboard input and user interactions.
pub struct InputHandler<'a, S, C> {
    app: &'a mut App<S, C>,
}

impl<'a, S: KeyValueStore + Clone, C: RegistrationClient> InputHandler<'a, S, C> {
    pub fn new(app: &'a mut App<S, C>) -> Self {
        Self { app }
    }

    /// Returns true when the view should end.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if let (KeyCode::Char('q' | 'Q'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            self.app.log("Exit requested");
            self.app.exit = Some(ExitReason::Quit);
            return true;
        }

        // Notices block everything else until dismissed.
        if self.app.notice.take().is_some() {
            return false;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => return GateHandler::new(self.app).request_close(),

            (KeyCode::Char('r' | 'R'), KeyModifiers::CONTROL) => {
                return GateHandler::new(self.app).request_replay();
            }

            (KeyCode::Char('s' | 'S'), KeyModifiers::CONTROL) => {
                ShareHandler::new(self.app).share();
            }

            (KeyCode::Tab | KeyCode::BackTab, _) => {
                self.app.focus = self.app.focus.next();
            }

            (KeyCode::Enter, _) => GateHandler::new(self.app).submit(),

            (KeyCode::Backspace, _) => {
                if let Some(field) = self.focused_field() {
                    field.pop();
                }
            }

            (KeyCode::Char(c), modifiers) if !modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = self.focused_field() {
                    field.push(c);
                }
            }

            _ => {}
        }
        false
    }

    /// The form only takes input while the gate is locked.
    fn focused_field(&mut self) -> Option<&mut String> {
        if self.app.session.gate().is_unlocked() {
            return None;
        }

        Some(match self.app.focus {
            FormField::FullName => &mut self.app.full_name,
            FormField::Email => &mut self.app.email,
        })
    }
}
