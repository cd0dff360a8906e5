//! # Core Actor Trait
//!
//! An actor processes messages of one type, strictly one at a time, in
//! mailbox arrival order. Implementors provide the two handler contracts;
//! the lifecycle hooks have default no-op bodies.

use async_trait::async_trait;

use crate::reply::ReplyToken;
use crate::types::ActorResult;

/// Lifecycle of a single actor instance.
///
/// Transitions only move forward: `Created → Active → Stopped`. There is no
/// way back out of `Stopped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorState {
    /// Constructed, mailbox accepting envelopes, run loop not yet draining.
    Created = 0,
    /// Run loop draining the mailbox.
    Active = 1,
    /// No further submissions accepted; queued envelopes were discarded.
    Stopped = 2,
}

/// A typed message processor owning one mailbox and one sequential
/// execution context.
///
/// The runtime guarantees that at most one of the methods below is executing
/// for a given actor instance at any instant, so `&mut self` state needs no
/// further synchronization.
///
/// Both handler methods report failure by returning `Err`. A failure never
/// stalls the run loop: the runtime reports it (and, for requests, resolves
/// the pending ask as [`crate::errors::ActorError::HandlerFailed`]) and
/// moves on to the next envelope.
#[async_trait]
pub trait Actor: Send + 'static {
    /// The message type this actor accepts.
    type Msg: Send + 'static;
    /// The reply type produced for request/reply envelopes.
    type Reply: Send + 'static;

    /// Runs once, before the first envelope is dispatched. An `Err` here
    /// stops the actor without processing anything.
    async fn started(&mut self) -> ActorResult<()> {
        Ok(())
    }

    /// Handles a fire-and-forget envelope. Side effects only; there is no
    /// reply path, so failures go to the runtime's failure observer.
    async fn handle(&mut self, msg: Self::Msg) -> ActorResult<()>;

    /// Handles a request/reply envelope. `reply` must be consumed exactly
    /// once; a token dropped without a send resolves the caller's ask as
    /// cancelled.
    async fn handle_request(&mut self, msg: Self::Msg, reply: ReplyToken<Self::Reply>)
        -> ActorResult<()>;

    /// Runs once, after the run loop has drained and discarded the mailbox.
    /// Not invoked for an actor that never started.
    async fn stopped(&mut self) {}
}
