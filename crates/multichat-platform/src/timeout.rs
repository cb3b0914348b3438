//! Request deadlines on top of browser timers.

use std::future::Future;
use std::pin::pin;

use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use multichat_types::{ChatError, Result};

/// Race `fut` against a `timeout_ms` timer; expiry yields `ChatError::Timeout`
/// and drops `fut`.
pub async fn with_timeout<F, T>(fut: F, timeout_ms: u32) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let fut = pin!(fut);
    let timer = pin!(TimeoutFuture::new(timeout_ms));

    match select(fut, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ChatError::Timeout(u64::from(timeout_ms))),
    }
}
