use std::future::Future;

use tokio::time::{sleep, Duration};

const MAX_RETRIES: u32 = 3;
const RETRY_DELAY_MS: u64 = 500;

/// Run `operation` until it succeeds or `MAX_RETRIES` attempts failed, waiting
/// a little longer after each failure.
pub async fn with_retry<F, T, E, Fut>(mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut retries = 0;
    loop {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(e) => {
                retries += 1;
                if retries >= MAX_RETRIES {
                    return Err(e);
                }
                log::warn!(
                    "request failed (retry {}/{}): {}",
                    retries,
                    MAX_RETRIES,
                    e
                );
                sleep(Duration::from_millis(RETRY_DELAY_MS * retries as u64)).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::with_retry;

    #[tokio::test]
    async fn test_retry_until_success() {
        let calls = Cell::new(0);
        let result: Result<u32, String> = with_retry(|| {
            calls.set(calls.get() + 1);
            let attempt = calls.get();
            async move {
                if attempt < 2 {
                    Err("connection reset".to_string())
                } else {
                    Ok(attempt)
                }
            }
        })
        .await;
        assert_eq!(result, Ok(2));
    }

    #[tokio::test]
    async fn test_retry_gives_up() {
        let calls = Cell::new(0);
        let result: Result<(), String> = with_retry(|| {
            calls.set(calls.get() + 1);
            async { Err("down".to_string()) }
        })
        .await;
        assert!(result.is_err());
        assert_eq!(calls.get(), 3);
    }
}
