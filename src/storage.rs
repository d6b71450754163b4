//! Key-value persistence port shared by the stats store and the access gate.

use anyhow::{Result, anyhow};
use std::{
    collections::HashMap,
    future::Future,
    sync::{Arc, Mutex},
};

/// Written once per session start.
pub const PLAYED_BEFORE_KEY: &str = "hasPlayedBefore";
/// Present once the registration form has been submitted.
pub const GATE_UNLOCKED_KEY: &str = "enteredGiveaway";
/// JSON-encoded [`crate::stats::GameStats`].
pub const GAME_STATS_KEY: &str = "gameStats";

/// Durable string storage keyed by name.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>>> + Send;

    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<()>> + Send;
}

/// Process-local store, used by tests and as a scratch store.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.inner
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get(GAME_STATS_KEY).await.unwrap(), None);

        store.set(GAME_STATS_KEY, "one").await.unwrap();
        store.set(GAME_STATS_KEY, "two").await.unwrap();
        assert_eq!(
            store.get(GAME_STATS_KEY).await.unwrap(),
            Some("two".to_string())
        );
    }

    #[tokio::test]
    async fn test_memory_store_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set(PLAYED_BEFORE_KEY, "true").await.unwrap();
        assert_eq!(
            other.get(PLAYED_BEFORE_KEY).await.unwrap(),
            Some("true".to_string())
        );
    }
}
