//! One player session: stats, gate and the game that just finished.

use anyhow::{Context, Result};
use tracing::info;

use crate::{
    config::Config,
    evaluation::FinishedGame,
    gate::AccessGate,
    histogram::{self, HistogramBar},
    registration::RegistrationClient,
    share::{ShareEncoder, ShareFlags},
    stats::{GameStats, StatsStore},
    storage::{KeyValueStore, PLAYED_BEFORE_KEY},
};

pub struct Session<S, C> {
    stats: StatsStore<S>,
    gate: AccessGate<S, C>,
    encoder: ShareEncoder,
    current: Option<FinishedGame>,
}

impl<S: KeyValueStore + Clone, C: RegistrationClient> Session<S, C> {
    pub async fn start(store: S, client: C, config: &Config) -> Result<Self> {
        store
            .set(PLAYED_BEFORE_KEY, "true")
            .await
            .context("Failed to mark first play")?;

        let stats = StatsStore::load(store.clone(), config.max_guesses).await?;
        let gate = AccessGate::load(store, client).await?;
        info!(
            games_played = stats.stats().games_played,
            unlocked = gate.is_unlocked(),
            "Session started"
        );

        Ok(Self {
            stats,
            gate,
            encoder: ShareEncoder::new(config.game_title.clone(), config.max_guesses),
            current: None,
        })
    }

    pub fn stats(&self) -> &GameStats {
        self.stats.stats()
    }

    pub fn gate(&self) -> &AccessGate<S, C> {
        &self.gate
    }

    pub fn gate_mut(&mut self) -> &mut AccessGate<S, C> {
        &mut self.gate
    }

    pub fn current_game(&self) -> Option<&FinishedGame> {
        self.current.as_ref()
    }

    /// Record `game` and make it the current game for display and sharing.
    pub async fn finish_game(&mut self, game: FinishedGame) -> Result<GameStats> {
        let snapshot = self.stats.record(game.outcome()).await?;
        self.current = Some(game);
        Ok(snapshot)
    }

    /// Distribution bars, highlighting the current game when it was a win.
    pub fn histogram(&self) -> Vec<HistogramBar> {
        let highlight = self
            .current
            .as_ref()
            .and_then(|game| histogram::highlight_for(game.outcome()));

        histogram::compute(self.stats(), highlight)
    }

    /// Share text for the current game, if one was finished this session.
    pub fn share_text(&self, flags: ShareFlags) -> Option<String> {
        self.current
            .as_ref()
            .map(|game| self.encoder.encode(game.rows(), game.did_lose(), flags))
    }
}
