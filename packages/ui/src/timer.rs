//! Cross-platform timers.

use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures::future::{select, Either};

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Run `fut` to completion, or give up after `duration` and return `None`.
pub async fn with_timeout<F: Future>(duration: Duration, fut: F) -> Option<F::Output> {
    let fut = pin!(fut);
    let timer = pin!(sleep(duration));
    match select(fut, timer).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_with_timeout() {
        let done = with_timeout(Duration::from_millis(200), async { 7 }).await;
        assert_eq!(done, Some(7));

        let late = with_timeout(
            Duration::from_millis(10),
            sleep(Duration::from_millis(500)),
        )
        .await;
        assert!(late.is_none());
    }
}
