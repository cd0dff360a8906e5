//! # Ask Handles
//!
//! The caller-facing half of a request/reply submission. An [`AskHandle`]
//! resolves exactly once: with the handler's reply, with
//! [`ActorError::Cancelled`], or with [`ActorError::HandlerFailed`].

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use tokio::sync::oneshot;

use crate::errors::ActorError;
use crate::types::ActorResult;

/// Awaitable result of an `ask` submission.
///
/// A dropped reply continuation resolves the handle as
/// [`ActorError::Cancelled`]; the handle itself may be dropped freely if the
/// caller loses interest in the outcome.
#[derive(Debug)]
pub struct AskHandle<R> {
    rx: oneshot::Receiver<ActorResult<R>>,
}

impl<R> AskHandle<R> {
    pub(crate) fn new(rx: oneshot::Receiver<ActorResult<R>>) -> Self {
        Self { rx }
    }

    /// Awaits the outcome, but no longer than `deadline`. An elapsed
    /// deadline resolves as [`ActorError::Timeout`]; the envelope itself is
    /// not withdrawn from the mailbox.
    pub async fn resolve_within(self, deadline: Duration) -> ActorResult<R> {
        match tokio::time::timeout(deadline, self).await {
            Ok(outcome) => outcome,
            Err(_) => Err(ActorError::Timeout),
        }
    }
}

impl<R> Future for AskHandle<R> {
    type Output = ActorResult<R>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match Pin::new(&mut this.rx).poll(cx) {
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            Poll::Ready(Err(_)) => Poll::Ready(Err(ActorError::Cancelled)),
            Poll::Pending => Poll::Pending,
        }
    }
}
