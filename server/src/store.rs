//! In-memory session store keyed by session id.
//!
//! Holds only plain JSON produced by `Session::to_json`, stamped with the
//! time it was last written. Entries idle for longer than the session max
//! age read as absent and are evicted on the next write. Concurrent requests
//! on the same session id are last-writer-wins.

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct Entry {
    value: Value,
    touched: Instant,
}

impl Entry {
    fn is_expired(&self, max_age: Duration) -> bool {
        self.touched.elapsed() >= max_age
    }
}

type Sessions = Arc<RwLock<HashMap<Uuid, Entry>>>;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    sessions: Sessions,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored value for `id`, unless it has been idle for `max_age` or longer.
    pub async fn load(&self, id: &Uuid, max_age: Duration) -> Option<Value> {
        self.sessions
            .read()
            .await
            .get(id)
            .filter(|entry| !entry.is_expired(max_age))
            .map(|entry| entry.value.clone())
    }

    /// Write `value` for `id` and drop every entry idle for `max_age` or longer.
    pub async fn save(&self, id: Uuid, value: Value, max_age: Duration) {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| !entry.is_expired(max_age));
        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!(evicted, "expired sessions evicted");
        }
        sessions.insert(
            id,
            Entry {
                value,
                touched: Instant::now(),
            },
        );
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
