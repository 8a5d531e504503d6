use std::future::Future;

use tracing::warn;

use crate::error::Result;
use crate::utils::time::sleep_with_jitter;

pub async fn retry_with_backoff<T, F, Fut>(
    mut retries: u32,
    base_delay_ms: u64,
    operation: F,
) -> Result<T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut delay = base_delay_ms;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                if retries == 0 {
                    return Err(e);
                }

                warn!(
                    error = %e,
                    delay_ms = delay,
                    retries_left = retries,
                    "Request failed, retrying"
                );

                sleep_with_jitter(delay, delay / 2).await;
                retries -= 1;
                delay *= 2;
            }
        }
    }
}
