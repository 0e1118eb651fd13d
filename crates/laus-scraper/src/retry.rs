//! Optional retry policy for connection-level transport failures.
//!
//! The default policy (`max_retries = 0`) makes a single attempt, so a
//! transport failure propagates immediately and stops the run. Callers that
//! want resilience opt in through [`crate::LausClient::with_retry`].

use std::future::Future;
use std::time::Duration;

use crate::error::ScraperError;

const MAX_DELAY_MS: u64 = 60_000;

/// Returns `true` for connection-level failures worth another attempt.
///
/// HTTP status codes never reach here: the transport returns the body for
/// any status and leaves interpretation to the parser.
fn is_retriable(err: &ScraperError) -> bool {
    match err {
        ScraperError::Transport(e) => e.is_timeout() || e.is_connect() || e.is_request(),
        ScraperError::Discovery { .. }
        | ScraperError::Config(_)
        | ScraperError::InvalidEndpoint { .. }
        | ScraperError::InvalidIdentity { .. } => false,
    }
}

/// Delay before retry number `attempt` (1-based): `base * 2^(attempt-1)`,
/// capped at 60 s, then scaled by ±25 % jitter.
fn backoff_delay_ms(backoff_base_ms: u64, attempt: u32) -> u64 {
    let computed = backoff_base_ms.saturating_mul(1u64 << attempt.saturating_sub(1).min(20));
    let capped = computed.min(MAX_DELAY_MS);
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let jittered = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
    jittered
}

/// Runs `operation`, retrying retriable errors up to `max_retries` more times.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, ScraperError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ScraperError>>,
{
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                attempt += 1;
                let delay_ms = backoff_delay_ms(backoff_base_ms, attempt);
                tracing::warn!(
                    attempt,
                    max_retries,
                    delay_ms,
                    error = %err,
                    "transport failure, retrying after backoff"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}
