//! Retry loop around a single-attempt binding source.
//!
//! Invariants:
//! - At most `max_attempts` attempts; a zero setting still makes one attempt.
//! - `retry_delay` separates attempts; there is no pause after the last one.

use keyhints_config::FetchConfig;
use keyhints_core::RawBinding;
use tracing::{debug, warn};

use crate::error::{Result, SourceError};
use crate::source::BindingSource;

/// Fetch the binding table, retrying failed attempts.
///
/// # Errors
///
/// Returns `SourceError::RetriesExhausted` carrying the last attempt's error
/// when every attempt fails.
pub async fn fetch_with_retry<S: BindingSource>(
    source: &S,
    config: &FetchConfig,
) -> Result<Vec<RawBinding>> {
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match source.fetch().await {
            Ok(bindings) => {
                if attempt > 1 {
                    debug!(attempt, "Fetch succeeded after retry");
                }
                debug!(count = bindings.len(), source = %source.describe(), "Fetched bindings");
                return Ok(bindings);
            }
            Err(e) if attempt < max_attempts => {
                debug!(
                    attempt,
                    max_attempts,
                    delay_ms = config.retry_delay.as_millis() as u64,
                    error = %e,
                    "Fetch failed, retrying"
                );
                tokio::time::sleep(config.retry_delay).await;
                attempt += 1;
            }
            Err(e) => {
                warn!(attempts = attempt, error = %e, "Giving up on binding source");
                return Err(SourceError::RetriesExhausted {
                    attempts: attempt,
                    last: Box::new(e),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{Duration, Instant};

    /// Fails the first `failures` calls, then returns one binding.
    struct FlakySource {
        failures: usize,
        calls: AtomicUsize,
    }

    impl FlakySource {
        fn new(failures: usize) -> Self {
            Self {
                failures,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl BindingSource for FlakySource {
        fn describe(&self) -> String {
            "flaky".to_string()
        }

        async fn fetch(&self) -> Result<Vec<RawBinding>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                Err(SourceError::InvalidJson(
                    serde_json::from_str::<Vec<u8>>("").unwrap_err(),
                ))
            } else {
                Ok(vec![RawBinding {
                    key: "Q".to_string(),
                    ..RawBinding::default()
                }])
            }
        }
    }

    fn config(max_attempts: usize, delay_ms: u64) -> FetchConfig {
        FetchConfig {
            max_attempts,
            retry_delay: Duration::from_millis(delay_ms),
            ..FetchConfig::default()
        }
    }

    #[tokio::test]
    async fn test_first_attempt_success() {
        let source = FlakySource::new(0);
        let binds = fetch_with_retry(&source, &config(5, 0)).await.unwrap();
        assert_eq!(binds.len(), 1);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_recovers_after_failures() {
        let source = FlakySource::new(3);
        let binds = fetch_with_retry(&source, &config(5, 0)).await.unwrap();
        assert_eq!(binds[0].key, "Q");
        assert_eq!(source.calls(), 4);
    }

    #[tokio::test]
    async fn test_exhaustion_after_max_attempts() {
        let source = FlakySource::new(usize::MAX);
        let err = fetch_with_retry(&source, &config(5, 0)).await.unwrap_err();
        assert_eq!(source.calls(), 5);
        match err {
            SourceError::RetriesExhausted { attempts, last } => {
                assert_eq!(attempts, 5);
                assert!(matches!(*last, SourceError::InvalidJson(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_zero_attempts_still_tries_once() {
        let source = FlakySource::new(usize::MAX);
        let err = fetch_with_retry(&source, &config(0, 0)).await.unwrap_err();
        assert_eq!(source.calls(), 1);
        assert_eq!(err.attempts(), Some(1));
    }

    #[tokio::test]
    async fn test_delay_only_between_attempts() {
        let source = FlakySource::new(usize::MAX);
        let started = Instant::now();
        let _ = fetch_with_retry(&source, &config(3, 30)).await;
        let elapsed = started.elapsed();

        assert!(elapsed >= Duration::from_millis(60), "{elapsed:?}");
        assert!(elapsed < Duration::from_millis(2000), "{elapsed:?}");
    }
}
