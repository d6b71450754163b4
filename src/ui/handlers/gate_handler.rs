//! Registration form submission and gated close/replay.

use crate::{
    gate::{GateError, Submission},
    registration::RegistrationClient,
    storage::KeyValueStore,
};

use super::super::{
    app::{App, block_on},
    types::ExitReason,
};

/// Helper struct for routing view actions through the access gate.
pub struct GateHandler<'a, S, C> {
    app: &'a mut App<S, C>,
}

impl<'a, S: KeyValueStore + Clone, C: RegistrationClient> GateHandler<'a, S, C> {
    pub fn new(app: &'a mut App<S, C>) -> Self {
        Self { app }
    }

    pub fn submit(&mut self) {
        let email = self.app.email.clone();
        let full_name = self.app.full_name.clone();

        let result = block_on(self.app.session.gate_mut().submit(&email, &full_name));

        match result {
            Ok(Submission::Started(_)) => {
                self.app.log("Details submitted, unlimited play unlocked");
            }
            Ok(Submission::Suppressed) => {
                self.app.log("Still submitting, please wait");
            }
            Ok(Submission::AlreadyUnlocked) => {}
            Err(e) => {
                self.app.log(format!("Submission rejected: {}", e));
                self.app.notice = Some(e.to_string());
            }
        }
    }

    /// Returns true when the view closes.
    pub fn request_close(&mut self) -> bool {
        // Nothing to gate before the first game.
        if self.app.session.stats().is_empty() {
            self.app.exit = Some(ExitReason::Closed);
            return true;
        }

        let result = self.app.session.gate().request_close(|| ExitReason::Closed);
        self.finish(result)
    }

    /// Returns true when the view closes for a new round.
    pub fn request_replay(&mut self) -> bool {
        let result = self.app.session.gate().request_replay(|| ExitReason::Replay);
        self.finish(result)
    }

    fn finish(&mut self, result: Result<ExitReason, GateError>) -> bool {
        match result {
            Ok(reason) => {
                self.app.log(format!("Leaving stats view: {:?}", reason));
                self.app.exit = Some(reason);
                true
            }
            Err(e) => {
                self.app.notice = Some(e.to_string());
                false
            }
        }
    }
}
