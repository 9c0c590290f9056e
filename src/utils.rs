use std::future::Future;
use tokio::time::{sleep, Duration};
use tracing::debug;

/// Runs `check` until it reports `true`, sleeping `delay` between attempts.
///
/// The first attempt runs immediately. Returns `Ok(false)` once `max_attempts`
/// checks have all reported `false`, and stops at the first error.
pub async fn poll_until<E, Fut, F>(
    mut check: F,
    delay: Duration,
    max_attempts: usize,
) -> Result<bool, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    for attempt in 1..=max_attempts {
        if check().await? {
            return Ok(true);
        }
        if attempt < max_attempts {
            debug!(
                "Not ready yet. Checking again in {:?} (attempt {}/{})",
                delay, attempt, max_attempts
            );
            sleep(delay).await;
        }
    }
    Ok(false)
}
