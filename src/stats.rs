//! Persisted player statistics and their per-game update rule.

use anyhow::{Context, Result, bail, ensure};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::storage::{GAME_STATS_KEY, KeyValueStore};

pub const DEFAULT_MAX_GUESSES: usize = 6;

/// How a completed game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won { guesses: usize },
    Lost,
}

/// Aggregate performance across every completed game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    pub win_distribution: Vec<u32>,
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
}

impl GameStats {
    pub fn new(max_guesses: usize) -> Self {
        Self {
            win_distribution: vec![0; max_guesses],
            games_played: 0,
            games_won: 0,
            current_streak: 0,
            max_streak: 0,
        }
    }

    pub fn max_guesses(&self) -> usize {
        self.win_distribution.len()
    }

    /// True until the first game is recorded; views show a placeholder then.
    pub fn is_empty(&self) -> bool {
        self.games_played == 0
    }

    pub fn games_lost(&self) -> u32 {
        self.games_played - self.games_won
    }

    /// Win percentage rounded to the nearest integer.
    pub fn success_rate(&self) -> u32 {
        let played = self.games_played.max(1) as f64;
        (100.0 * self.games_won as f64 / played).round() as u32
    }

    /// Apply one completed game.
    ///
    /// # Panics
    ///
    /// If a win reports a guess count outside `1..=max_guesses`.
    pub fn record(&mut self, outcome: GameOutcome) {
        self.games_played += 1;

        match outcome {
            GameOutcome::Won { guesses } => {
                assert!(
                    (1..=self.max_guesses()).contains(&guesses),
                    "guess count {} outside 1..={}",
                    guesses,
                    self.max_guesses()
                );
                self.games_won += 1;
                self.win_distribution[guesses - 1] += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
            }
            GameOutcome::Lost => {
                self.current_streak = 0;
            }
        }
    }

    /// Check the aggregate's internal consistency.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.games_won <= self.games_played,
            "games won ({}) exceeds games played ({})",
            self.games_won,
            self.games_played
        );

        let distributed: u64 = self.win_distribution.iter().map(|&c| c as u64).sum();
        ensure!(
            distributed == self.games_won as u64,
            "win distribution sums to {} but {} games were won",
            distributed,
            self.games_won
        );

        ensure!(
            self.current_streak <= self.max_streak,
            "current streak ({}) exceeds max streak ({})",
            self.current_streak,
            self.max_streak
        );

        Ok(())
    }

    /// Fit a stored distribution to the configured guess limit.
    fn fit_to(&mut self, max_guesses: usize) -> Result<()> {
        let stored = self.win_distribution.len();
        if stored > max_guesses {
            bail!(
                "stored distribution has {} buckets, limit is {}",
                stored,
                max_guesses
            );
        }
        self.win_distribution.resize(max_guesses, 0);
        Ok(())
    }
}

/// Owns the persisted [`GameStats`] for the local player.
pub struct StatsStore<S> {
    store: S,
    stats: GameStats,
}

impl<S: KeyValueStore> StatsStore<S> {
    /// Load stats from `store`, starting from zero on first use.
    pub async fn load(store: S, max_guesses: usize) -> Result<Self> {
        let stats = match store.get(GAME_STATS_KEY).await? {
            Some(json) => {
                let mut stats: GameStats =
                    serde_json::from_str(&json).context("Failed to parse stored game stats")?;
                stats.fit_to(max_guesses)?;
                stats.validate().context("Stored game stats are inconsistent")?;
                debug!(games_played = stats.games_played, "Loaded game stats");
                stats
            }
            None => {
                info!("No stored game stats, starting fresh");
                GameStats::new(max_guesses)
            }
        };

        Ok(Self { store, stats })
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Record a completed game and persist the new snapshot.
    ///
    /// The in-memory snapshot only changes once the write succeeds.
    pub async fn record(&mut self, outcome: GameOutcome) -> Result<GameStats> {
        let mut next = self.stats.clone();
        next.record(outcome);

        let json = serde_json::to_string(&next).context("Failed to serialize game stats")?;
        self.store
            .set(GAME_STATS_KEY, &json)
            .await
            .context("Failed to save game stats")?;

        info!(
            ?outcome,
            games_played = next.games_played,
            current_streak = next.current_streak,
            "Recorded game"
        );
        self.stats = next;
        Ok(self.stats.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn won(guesses: usize) -> GameOutcome {
        GameOutcome::Won { guesses }
    }

    #[test]
    fn test_new_stats_are_zeroed() {
        let stats = GameStats::new(6);
        assert_eq!(stats.win_distribution, vec![0; 6]);
        assert!(stats.is_empty());
        assert_eq!(stats.success_rate(), 0);
        assert!(stats.validate().is_ok());
    }

    #[test]
    fn test_win_updates_distribution_and_streak() {
        let mut stats = GameStats::new(6);
        stats.record(won(4));

        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.win_distribution, vec![0, 0, 0, 1, 0, 0]);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 1);
    }

    #[test]
    fn test_loss_resets_current_streak_only() {
        let mut stats = GameStats::new(6);
        stats.record(won(2));
        stats.record(won(3));
        stats.record(won(1));
        stats.record(GameOutcome::Lost);

        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 3);
        assert_eq!(stats.games_lost(), 1);
        assert_eq!(stats.success_rate(), 75);
    }

    #[test]
    fn test_invariants_hold_across_mixed_sequence() {
        let mut stats = GameStats::new(6);
        let mut last_max = 0;
        let outcomes = [
            won(1),
            GameOutcome::Lost,
            won(6),
            won(3),
            won(3),
            GameOutcome::Lost,
            GameOutcome::Lost,
            won(5),
            won(2),
            won(4),
            won(4),
        ];

        for outcome in outcomes {
            let before = stats.current_streak;
            stats.record(outcome);

            match outcome {
                GameOutcome::Won { .. } => assert_eq!(stats.current_streak, before + 1),
                GameOutcome::Lost => assert_eq!(stats.current_streak, 0),
            }
            assert!(stats.max_streak >= last_max);
            last_max = stats.max_streak;
            assert!(stats.validate().is_ok());
        }

        assert_eq!(stats.games_played, 11);
        assert_eq!(stats.games_won, 8);
        assert_eq!(stats.max_streak, 4);
    }

    #[test]
    #[should_panic(expected = "outside 1..=6")]
    fn test_zero_guess_win_panics() {
        GameStats::new(6).record(won(0));
    }

    #[test]
    #[should_panic(expected = "outside 1..=6")]
    fn test_guess_count_above_limit_panics() {
        GameStats::new(6).record(won(7));
    }

    #[test]
    fn test_validate_rejects_inconsistent_stats() {
        let mut stats = GameStats::new(6);
        stats.games_won = 1;
        stats.games_played = 1;
        assert!(stats.validate().is_err());

        let mut stats = GameStats::new(6);
        stats.current_streak = 2;
        assert!(stats.validate().is_err());
    }

    #[test]
    fn test_stats_serialize_camel_case() {
        let json = serde_json::to_string(&GameStats::new(2)).unwrap();
        assert_eq!(
            json,
            r#"{"winDistribution":[0,0],"gamesPlayed":0,"gamesWon":0,"currentStreak":0,"maxStreak":0}"#
        );
    }

    #[tokio::test]
    async fn test_store_persists_each_record() {
        let backing = MemoryStore::new();
        let mut store = StatsStore::load(backing.clone(), 6).await.unwrap();
        assert!(store.stats().is_empty());

        let snapshot = store.record(won(3)).await.unwrap();
        assert_eq!(&snapshot, store.stats());

        let reloaded = StatsStore::load(backing, 6).await.unwrap();
        assert_eq!(reloaded.stats(), &snapshot);
    }

    #[tokio::test]
    async fn test_load_pads_shorter_distribution() {
        let backing = MemoryStore::new();
        backing
            .set(
                GAME_STATS_KEY,
                r#"{"winDistribution":[1,2],"gamesPlayed":4,"gamesWon":3,"currentStreak":1,"maxStreak":2}"#,
            )
            .await
            .unwrap();

        let store = StatsStore::load(backing, 6).await.unwrap();
        assert_eq!(store.stats().win_distribution, vec![1, 2, 0, 0, 0, 0]);
    }

    #[tokio::test]
    async fn test_load_rejects_corrupt_stats() {
        let backing = MemoryStore::new();
        backing
            .set(
                GAME_STATS_KEY,
                r#"{"winDistribution":[1,0,0,0,0,0],"gamesPlayed":1,"gamesWon":2,"currentStreak":0,"maxStreak":0}"#,
            )
            .await
            .unwrap();
        assert!(StatsStore::load(backing.clone(), 6).await.is_err());

        backing.set(GAME_STATS_KEY, "not json").await.unwrap();
        assert!(StatsStore::load(backing, 6).await.is_err());
    }

    #[tokio::test]
    async fn test_load_rejects_longer_distribution() {
        let backing = MemoryStore::new();
        let json = serde_json::to_string(&GameStats::new(8)).unwrap();
        backing.set(GAME_STATS_KEY, &json).await.unwrap();

        assert!(StatsStore::load(backing, 6).await.is_err());
    }
}
