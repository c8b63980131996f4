//! Wall-clock feed for the dashboard header.
//!
//! Ticks once a minute on its own task. Display only; it has no
//! interaction with the data providers.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

const TICK_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Clone)]
pub struct WallClock {
    now: Arc<RwLock<DateTime<Utc>>>,
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            now: Arc::new(RwLock::new(Utc::now())),
        }
    }

    /// The minute-resolution display time.
    pub async fn display_time(&self) -> DateTime<Utc> {
        *self.now.read().await
    }

    /// Spawn the once-a-minute tick task.
    pub fn spawn_tick(&self) {
        let now = self.now.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK_INTERVAL);
            // First tick completes immediately; skip it so the stored value
            // changes only on minute boundaries.
            interval.tick().await;
            loop {
                interval.tick().await;
                *now.write().await = Utc::now();
            }
        });
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_at_the_current_time() {
        let clock = WallClock::new();
        let drift = Utc::now() - clock.display_time().await;
        assert!(drift.num_seconds() < 5);
    }
}
