use async_trait::async_trait;
use wren_api::actor::Actor;

use crate::config::BackpressureStrategy;
use crate::envelope::Envelope;
use crate::error::MailboxError;

pub mod mpsc;

pub use mpsc::MpscMailbox;

/// Abstract interface for an actor's message queue.
///
/// Implementors must guarantee FIFO ordering for a single consumer, and must
/// accept pushes from concurrent producers.
#[async_trait]
pub trait Mailbox<A: Actor>: Send + Sync {
    /// Pushes an envelope, applying the given backpressure strategy when the
    /// mailbox is at capacity.
    async fn push(
        &self,
        envelope: Envelope<A>,
        strategy: BackpressureStrategy,
    ) -> Result<(), MailboxError>;

    /// Waits for the next envelope. Returns `None` once the mailbox is
    /// closed; envelopes still queued at close time are not delivered here.
    async fn pop(&self) -> Option<Envelope<A>>;

    /// Removes a queued envelope without waiting. Used to drain the queue on
    /// shutdown regardless of the closed flag.
    fn try_pop(&self) -> Option<Envelope<A>>;

    /// Current number of queued envelopes (snapshot in time).
    fn len(&self) -> usize;

    /// Whether the mailbox is currently empty (snapshot in time).
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Configured capacity; `None` means unbounded.
    fn capacity(&self) -> Option<usize>;

    /// Closes the mailbox: further pushes fail and a parked `pop` wakes with
    /// `None`.
    fn close(&self);

    /// Whether `close` has been called.
    fn is_closed(&self) -> bool;
}
