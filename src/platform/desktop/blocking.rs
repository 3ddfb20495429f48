use std::time::Duration;

use anyhow::{Context, Result};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs `job` off the UI thread, calling `on_tick` while it is still running.
pub async fn run_blocking<F, T>(job: F, mut on_tick: impl FnMut()) -> Result<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let handle = tokio::task::spawn_blocking(job);
    while !handle.is_finished() {
        tokio::time::sleep(POLL_INTERVAL).await;
        on_tick();
    }
    handle.await.context("background task failed")
}
