//! Cache Reaper Task
//!
//! Background task that periodically removes stale cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{oneshot, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::cache::CacheStore;

/// Shortest period the reaper will tick at. `tokio::time::interval` panics on
/// a zero period.
const MIN_REAPER_PERIOD: Duration = Duration::from_millis(1);

/// Handle to a running reaper task.
///
/// Dropping the handle drops the shutdown sender, which also ends the task.
#[derive(Debug)]
pub struct ReaperHandle {
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl ReaperHandle {
    /// Signals the reaper to stop and waits for it to exit.
    ///
    /// The shutdown signal is only observed between ticks, so a sweep that is
    /// already running completes before this returns.
    pub async fn stop(self) {
        // The task may have exited already; nothing to signal then.
        let _ = self.shutdown.send(());

        if let Err(err) = self.task.await {
            warn!("Cache reaper ended abnormally: {}", err);
        }
    }

    /// Returns true once the task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Spawns a background task that sweeps `store` every `interval`.
///
/// The first sweep runs one full interval after spawning; sweeps hold the
/// write lock for their whole duration so readers never see a half-swept map.
///
/// # Arguments
/// * `store` - Shared cache store
/// * `interval` - Sweep period, also the staleness threshold of the store
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(CacheStore::new(Duration::from_secs(300))));
/// let reaper = spawn_reaper(store.clone(), Duration::from_secs(300));
/// // Later, during shutdown:
/// reaper.stop().await;
/// ```
pub fn spawn_reaper(store: Arc<RwLock<CacheStore>>, interval: Duration) -> ReaperHandle {
    let period = interval.max(MIN_REAPER_PERIOD);
    let (shutdown, mut shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        info!("Starting cache reaper with interval of {:?}", period);

        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                // Fires on an explicit stop and when the handle is dropped
                _ = &mut shutdown_rx => break,
            }

            let removed = {
                let mut guard = store.write().await;
                guard.sweep()
            };

            if removed > 0 {
                info!("Cache reaper: removed {} stale entries", removed);
            } else {
                debug!("Cache reaper: no stale entries found");
            }
        }

        info!("Cache reaper stopped");
    });

    ReaperHandle { shutdown, task }
}
