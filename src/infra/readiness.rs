//! Startup readiness polling for external stores.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use crate::errors::{AppError, AppResult};

/// Poll `probe` until it succeeds or `timeout` elapses.
///
/// Returns whatever the successful probe produced, so a probe that opens a
/// connection can hand it straight to the caller.
pub async fn wait_until_ready<T, E, F, Fut>(
    store: &str,
    timeout: Duration,
    interval: Duration,
    mut probe: F,
) -> AppResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    tracing::info!("Waiting for {}...", store);
    let started = Instant::now();
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;
        match probe().await {
            Ok(value) => {
                tracing::info!(attempt, "{} is ready", store);
                return Ok(value);
            }
            Err(e) if started.elapsed() >= timeout => {
                tracing::error!(attempt, "{} did not become ready in time: {}", store, e);
                return Err(AppError::unavailable(format!(
                    "{} did not become ready in {}s: {}",
                    store,
                    timeout.as_secs(),
                    e
                )));
            }
            Err(e) => {
                tracing::warn!(attempt, "{} not ready yet: {}", store, e);
                tokio::time::sleep(interval).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn test_returns_value_once_probe_succeeds() {
        let calls = AtomicU32::new(0);

        let value = wait_until_ready(
            "Postgres",
            Duration::from_secs(5),
            Duration::from_millis(5),
            || async {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                if n < 3 {
                    Err(format!("attempt {} refused", n))
                } else {
                    Ok(n)
                }
            },
        )
        .await
        .unwrap();

        assert_eq!(value, 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_timeout() {
        let result: AppResult<()> = wait_until_ready(
            "Neo4j",
            Duration::from_millis(20),
            Duration::from_millis(5),
            || async { Err::<(), _>("connection refused") },
        )
        .await;

        match result {
            Err(AppError::Unavailable(msg)) => {
                assert!(msg.contains("Neo4j"));
                assert!(msg.contains("connection refused"));
            }
            other => panic!("expected Unavailable, got {:?}", other.map(|_| ())),
        }
    }
}
