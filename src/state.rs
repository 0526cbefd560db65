use std::sync::{Arc, Mutex};
use std::time::Instant;

use crate::config::Config;
use crate::store::Store;

/// Shared request-handler state. Everything mutable is owned here and
/// injected, so handlers never reach for module-level globals and tests can
/// build isolated instances.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Store>,
    config: Arc<Config>,
    reward_buffer: Arc<Mutex<Vec<f64>>>,
    started_at: Instant,
}

impl AppState {
    pub fn new(store: Arc<Store>, config: &Config) -> Self {
        Self {
            store,
            config: Arc::new(config.clone()),
            reward_buffer: Arc::new(Mutex::new(Vec::new())),
            started_at: Instant::now(),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Process-lifetime reward buffer; repopulated from scratch after a
    /// restart, unlike the persisted history.
    pub fn push_reward(&self, reward: f64) {
        self.reward_buffer
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(reward);
    }

    pub fn reward_stats(&self) -> (usize, f64) {
        let buffer = self.reward_buffer.lock().unwrap_or_else(|e| e.into_inner());
        let count = buffer.len();
        let mean = if count > 0 {
            buffer.iter().sum::<f64>() / count as f64
        } else {
            0.0
        };
        (count, mean)
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
