use crate::{delivery::deliver, registration::RegistrationClient, storage::KeyValueStore};

use super::super::app::App;

/// Helper struct for sharing the current game.
pub struct ShareHandler<'a, S, C> {
    app: &'a mut App<S, C>,
}

impl<'a, S: KeyValueStore + Clone, C: RegistrationClient> ShareHandler<'a, S, C> {
    pub fn new(app: &'a mut App<S, C>) -> Self {
        Self { app }
    }

    pub fn share(&mut self) {
        let Some(text) = self.app.session.share_text(self.app.share_flags) else {
            self.app.log("No finished game to share");
            return;
        };

        let outcome = deliver(self.app.delivery.as_mut(), &text);
        self.app.log(outcome.message());
        self.app.share_outcome = Some(outcome);
    }
}
