//! Future resolving to the digest computed by a spawned worker

use crate::{Digest, HashError, Result};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// Concrete async hash resolution result
///
/// Resolves to `HashError::Internal` if the worker is dropped before
/// sending its result.
#[must_use = "futures do nothing unless awaited"]
pub struct AsyncHashResult {
    receiver: oneshot::Receiver<Result<Digest>>,
}

impl AsyncHashResult {
    /// Create a new `AsyncHashResult` from a oneshot receiver
    pub(crate) fn new(receiver: oneshot::Receiver<Result<Digest>>) -> Self {
        Self { receiver }
    }

    /// Create an `AsyncHashResult` that's already completed
    pub fn ready(result: Result<Digest>) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(result);
        Self { receiver: rx }
    }

    /// Create an `AsyncHashResult` that yields an error
    pub fn error(error: HashError) -> Self {
        Self::ready(Err(error))
    }
}

impl Future for AsyncHashResult {
    type Output = Result<Digest>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => {
                Poll::Ready(Err(HashError::internal("Hash resolution task dropped")))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
