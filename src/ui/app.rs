use std::{fmt::Display, future::Future, io::Stdout, time::Duration};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::{
    delivery::{ShareOutcome, ShareTarget},
    gate::RegistrationStatus,
    registration::RegistrationClient,
    session::Session,
    share::ShareFlags,
    storage::KeyValueStore,
};

use super::{
    handlers::InputHandler,
    types::{ExitReason, FormField, LogBuffer},
};

/// Redraw interval while waiting for input; keeps the submit indicator fresh.
const TICK: Duration = Duration::from_millis(100);

/// Stats view state.
pub struct App<S, C> {
    pub(in crate::ui) session: Session<S, C>,
    pub(in crate::ui) share_flags: ShareFlags,
    pub(in crate::ui) delivery: Box<dyn ShareTarget>,
    pub(in crate::ui) full_name: String,
    pub(in crate::ui) email: String,
    pub(in crate::ui) focus: FormField,
    pub(in crate::ui) notice: Option<String>,
    pub(in crate::ui) share_outcome: Option<ShareOutcome>,
    pub(in crate::ui) exit: Option<ExitReason>,
    pub(in crate::ui) logs: LogBuffer,
}

impl<S: KeyValueStore + Clone, C: RegistrationClient> App<S, C> {
    pub fn new(
        session: Session<S, C>,
        share_flags: ShareFlags,
        delivery: Box<dyn ShareTarget>,
        logs: LogBuffer,
    ) -> Self {
        Self {
            session,
            share_flags,
            delivery,
            full_name: String::new(),
            email: String::new(),
            focus: FormField::FullName,
            notice: None,
            share_outcome: None,
            exit: None,
            logs,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<ExitReason> {
        info!("Stats view opened");
        self.log("Stats view opened");

        loop {
            self.poll_registration();
            terminal.draw(|f| self.draw(f))?;

            if event::poll(TICK)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && InputHandler::new(self).handle_key(key)
            {
                return Ok(self.exit.unwrap_or(ExitReason::Quit));
            }
        }
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }

    /// Surface the end of a registration request in the log panel.
    pub(in crate::ui) fn poll_registration(&mut self) {
        match self.session.gate_mut().poll_registration() {
            Some(RegistrationStatus::Succeeded) => self.log("Registration confirmed"),
            Some(RegistrationStatus::Failed(e)) => {
                self.log(format!("Registration not confirmed: {}", e))
            }
            Some(RegistrationStatus::Pending) | None => {}
        }
    }
}

/// Execute an async operation from the synchronous event loop.
pub(in crate::ui) fn block_on<F: Future>(future: F) -> F::Output {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
