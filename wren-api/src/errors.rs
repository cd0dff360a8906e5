//! # Actor Error Types
//!
//! The error taxonomy for the Wren actor model. Submission errors surface
//! directly from `tell`/`ask`; processing outcomes surface through the
//! resolution of an [`crate::ask::AskHandle`]. Callers can distinguish a
//! successful reply from a cancellation and from a handler failure by
//! matching on the resolved result alone.

use std::sync::Arc;

use thiserror::Error;

/// Core error type for the actor system.
#[derive(Error, Debug)]
pub enum ActorError {
    /// Submission was attempted after the actor transitioned to `Stopped`,
    /// or an ask was pending against an actor that stopped.
    #[error("actor is stopped")]
    Stopped,

    /// The ask's envelope was discarded before a reply was produced, or its
    /// reply continuation was dropped without being invoked.
    #[error("request was cancelled before a reply was delivered")]
    Cancelled,

    /// The handler returned an error while processing a request/reply
    /// envelope. Carries the underlying failure.
    #[error("handler failed: {0}")]
    HandlerFailed(#[source] Arc<ActorError>),

    /// A bounded mailbox rejected the envelope under the `Error`
    /// backpressure strategy.
    #[error("mailbox is full (capacity: {capacity})")]
    MailboxFull { capacity: usize },

    /// An ask was not resolved within the caller's deadline.
    #[error("ask timed out")]
    Timeout,

    /// Catch-all for failures raised inside handlers.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ActorError {
    /// Wraps a handler failure so the ask side can observe its source.
    pub fn handler_failed(source: ActorError) -> Self {
        ActorError::HandlerFailed(Arc::new(source))
    }
}
