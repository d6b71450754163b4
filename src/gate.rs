//! One-time registration gate in front of closing and replaying.
//!
//! The gate unlocks as soon as the unlock flag is stored; the registration
//! request runs afterwards in its own task and its result never re-locks the
//! gate. A failed request leaves a player unlocked locally but unknown to the
//! remote side.

use anyhow::Result;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::{
    registration::{Registration, RegistrationClient},
    storage::{GATE_UNLOCKED_KEY, KeyValueStore},
};

const MIN_EMAIL_LEN: usize = 5;
const MIN_NAME_PARTS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessState {
    Locked,
    Unlocked,
}

/// Whether a registration request is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightState {
    Idle,
    InFlight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationStatus {
    Pending,
    Succeeded,
    Failed(String),
}

impl RegistrationStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, RegistrationStatus::Pending)
    }
}

/// Rejections from the gate. The messages are shown to the player as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GateError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter your full name")]
    InvalidName,
    #[error("Please enter your details to have unlimited goes")]
    Locked,
    #[error("Could not save your details: {0}")]
    Storage(String),
}

impl GateError {
    pub fn is_validation(&self) -> bool {
        matches!(self, GateError::InvalidEmail | GateError::InvalidName)
    }
}

/// Check the registration form fields.
pub fn validate(email: &str, full_name: &str) -> Result<(), GateError> {
    if !email.contains('@') || email.chars().count() < MIN_EMAIL_LEN {
        return Err(GateError::InvalidEmail);
    }
    if full_name.split_whitespace().count() < MIN_NAME_PARTS {
        return Err(GateError::InvalidName);
    }
    Ok(())
}

/// Handle on a running registration request.
#[derive(Debug, Clone)]
pub struct RegistrationWatch {
    rx: watch::Receiver<RegistrationStatus>,
}

impl RegistrationWatch {
    pub fn status(&self) -> RegistrationStatus {
        self.rx.borrow().clone()
    }

    /// Wait until the request completes.
    pub async fn finished(mut self) -> RegistrationStatus {
        match self.rx.wait_for(|status| !status.is_pending()).await {
            Ok(status) => status.clone(),
            Err(_) => RegistrationStatus::Failed("registration task ended early".to_string()),
        }
    }
}

/// Result of a well-formed submission.
#[derive(Debug)]
pub enum Submission {
    /// Gate unlocked and the request was started.
    Started(RegistrationWatch),
    /// A request is already in flight; nothing happened.
    Suppressed,
    /// Gate was already unlocked; nothing was sent.
    AlreadyUnlocked,
}

pub struct AccessGate<S, C> {
    store: S,
    client: Arc<C>,
    state: AccessState,
    flight: Option<watch::Receiver<RegistrationStatus>>,
}

impl<S: KeyValueStore, C: RegistrationClient> AccessGate<S, C> {
    /// Seed the gate from the persisted unlock flag.
    pub async fn load(store: S, client: C) -> Result<Self> {
        let unlocked = store
            .get(GATE_UNLOCKED_KEY)
            .await?
            .is_some_and(|flag| !flag.is_empty());

        let state = if unlocked {
            AccessState::Unlocked
        } else {
            AccessState::Locked
        };
        info!(?state, "Access gate loaded");

        Ok(Self {
            store,
            client: Arc::new(client),
            state,
            flight: None,
        })
    }

    pub fn state(&self) -> AccessState {
        self.state
    }

    pub fn is_unlocked(&self) -> bool {
        self.state == AccessState::Unlocked
    }

    pub fn flight_state(&self) -> FlightState {
        let Some(rx) = &self.flight else {
            return FlightState::Idle;
        };

        let pending = rx.borrow().is_pending();
        // A closed sender with no result means the task died.
        if pending && rx.has_changed().is_ok() {
            FlightState::InFlight
        } else {
            FlightState::Idle
        }
    }

    /// Validate the form, store the unlock flag, unlock, then start the
    /// registration request without waiting for it.
    pub async fn submit(&mut self, email: &str, full_name: &str) -> Result<Submission, GateError> {
        if self.flight_state() == FlightState::InFlight {
            info!("Registration already in flight, ignoring submit");
            return Ok(Submission::Suppressed);
        }
        if self.is_unlocked() {
            return Ok(Submission::AlreadyUnlocked);
        }

        validate(email, full_name)?;

        self.store
            .set(GATE_UNLOCKED_KEY, "true")
            .await
            .map_err(|e| GateError::Storage(format!("{e:#}")))?;
        self.state = AccessState::Unlocked;
        info!("Access gate unlocked");

        let registration = Registration {
            email: email.to_string(),
            full_name: full_name.to_string(),
        };
        let (tx, rx) = watch::channel(RegistrationStatus::Pending);
        let client = Arc::clone(&self.client);

        tokio::spawn(async move {
            let status = match client.register(&registration).await {
                Ok(()) => {
                    info!("Registration accepted");
                    RegistrationStatus::Succeeded
                }
                Err(e) => {
                    warn!("Registration failed: {:#}", e);
                    RegistrationStatus::Failed(format!("{e:#}"))
                }
            };
            tx.send_replace(status);
        });

        self.flight = Some(rx.clone());
        Ok(Submission::Started(RegistrationWatch { rx }))
    }

    /// Take the result of a finished request, once.
    pub fn poll_registration(&mut self) -> Option<RegistrationStatus> {
        if self.flight_state() == FlightState::InFlight {
            return None;
        }

        let rx = self.flight.take()?;
        let status = rx.borrow().clone();
        if status.is_pending() {
            Some(RegistrationStatus::Failed(
                "registration task ended early".to_string(),
            ))
        } else {
            Some(status)
        }
    }

    /// Run `close` only once the gate is unlocked.
    pub fn request_close<T>(&self, close: impl FnOnce() -> T) -> Result<T, GateError> {
        self.guard("close").map(|()| close())
    }

    /// Run `replay` only once the gate is unlocked.
    pub fn request_replay<T>(&self, replay: impl FnOnce() -> T) -> Result<T, GateError> {
        self.guard("replay").map(|()| replay())
    }

    fn guard(&self, action: &str) -> Result<(), GateError> {
        if self.is_unlocked() {
            Ok(())
        } else {
            info!(action, "Refused while gate is locked");
            Err(GateError::Locked)
        }
    }
}
