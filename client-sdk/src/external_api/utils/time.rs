use std::time::Duration;

use chrono::{TimeDelta, Utc};
use tokio::time::sleep;

const MAX_STEP: Duration = Duration::from_secs(1);

/// Sleep for `seconds` of wall-clock time. Waking up every second keeps the
/// deadline accurate across a suspended machine.
pub async fn sleep_for(seconds: u64) {
    let deadline = Utc::now() + TimeDelta::seconds(seconds as i64);
    while let Ok(remaining) = (deadline - Utc::now()).to_std() {
        if remaining.is_zero() {
            break;
        }
        sleep(remaining.min(MAX_STEP)).await;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::sleep_for;

    #[tokio::test]
    async fn test_sleep_for_zero_returns_immediately() {
        let start = Instant::now();
        sleep_for(0).await;
        assert!(start.elapsed().as_millis() < 500);
    }
}
