//! # Reply Continuations
//!
//! A request/reply envelope carries a write-once slot holding the sending
//! half of a oneshot channel. The handler side sees it as a [`ReplyToken`]
//! whose `send` consumes the token; the runtime side keeps a
//! [`PendingReply`] on the same slot so it can resolve the ask as a failure
//! when the handler errors out before replying.
//!
//! Dropping every owner of the slot without a send resolves the ask as
//! [`ActorError::Cancelled`]. That happens immediately when a handler drops
//! its token unissued, and at stop time for envelopes that were never
//! dispatched.

use std::fmt;
use std::sync::{Arc, Mutex};

use tokio::sync::oneshot;
use tracing::debug;

use crate::ask::AskHandle;
use crate::errors::ActorError;
use crate::types::ActorResult;

type Slot<R> = Arc<Mutex<Option<oneshot::Sender<ActorResult<R>>>>>;

/// Creates the runtime half of a reply continuation together with the
/// caller's awaitable handle.
pub fn reply_channel<R>() -> (PendingReply<R>, AskHandle<R>) {
    let (tx, rx) = oneshot::channel();
    (
        PendingReply {
            slot: Arc::new(Mutex::new(Some(tx))),
        },
        AskHandle::new(rx),
    )
}

/// Handler-facing reply continuation. Invoked at most once; `send` consumes
/// the token.
pub struct ReplyToken<R> {
    slot: Slot<R>,
}

impl<R> ReplyToken<R> {
    /// Delivers the reply.
    ///
    /// Returns `Err(ActorError::Cancelled)` if the request was already
    /// resolved, which can only happen for a token stashed past a handler
    /// that returned `Err`. An asker that stopped waiting is not an error.
    pub fn send(self, value: R) -> ActorResult<()> {
        match self.take_sender() {
            Some(tx) => {
                let _ = tx.send(Ok(value));
                Ok(())
            }
            None => {
                debug!("reply arrived after the request was resolved");
                Err(ActorError::Cancelled)
            }
        }
    }

    fn take_sender(&self) -> Option<oneshot::Sender<ActorResult<R>>> {
        self.slot.lock().expect("reply slot lock poisoned").take()
    }
}

impl<R> fmt::Debug for ReplyToken<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReplyToken").finish_non_exhaustive()
    }
}

/// Runtime-facing half of a reply continuation.
///
/// The run loop derives the handler's token from this value, and uses it
/// afterwards to resolve the ask as a failure when the handler returned
/// `Err` without replying. Dropping it without either outcome leaves
/// cancellation to the oneshot channel's drop semantics.
pub struct PendingReply<R> {
    slot: Slot<R>,
}

impl<R> PendingReply<R> {
    /// Derives the handler-facing token sharing this slot.
    pub fn token(&self) -> ReplyToken<R> {
        ReplyToken {
            slot: Arc::clone(&self.slot),
        }
    }

    /// Resolves the ask with `err` unless a reply was already delivered.
    pub fn fail(self, err: ActorError) {
        if let Some(tx) = self.slot.lock().expect("reply slot lock poisoned").take() {
            let _ = tx.send(Err(err));
        }
    }

    /// Whether the slot has been consumed by a reply or a failure.
    pub fn is_resolved(&self) -> bool {
        self.slot.lock().expect("reply slot lock poisoned").is_none()
    }
}

impl<R> fmt::Debug for PendingReply<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingReply")
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_resolves_the_ask() {
        let (pending, handle) = reply_channel::<u32>();
        let token = pending.token();
        token.send(7).unwrap();
        assert!(pending.is_resolved());
        assert_eq!(handle.await.unwrap(), 7);
    }

    #[tokio::test]
    async fn fail_after_send_is_ignored() {
        let (pending, handle) = reply_channel::<u32>();
        pending.token().send(7).unwrap();
        pending.fail(ActorError::Stopped);
        assert_eq!(handle.await.unwrap(), 7);
    }

    #[tokio::test]
    async fn send_after_fail_reports_cancelled() {
        let (pending, handle) = reply_channel::<u32>();
        let token = pending.token();
        pending.fail(ActorError::Stopped);
        assert!(matches!(token.send(7), Err(ActorError::Cancelled)));
        assert!(matches!(handle.await, Err(ActorError::Stopped)));
    }

    #[tokio::test]
    async fn dropping_every_owner_cancels() {
        let (pending, handle) = reply_channel::<u32>();
        let token = pending.token();
        drop(pending);
        drop(token);
        assert!(matches!(handle.await, Err(ActorError::Cancelled)));
    }
}
