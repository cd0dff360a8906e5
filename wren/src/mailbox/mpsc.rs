use async_trait::async_trait;
use flume::{Receiver, Sender, TrySendError};
use tokio::sync::watch;
use wren_api::actor::Actor;

use crate::config::BackpressureStrategy;
use crate::envelope::Envelope;
use crate::error::MailboxError;
use crate::mailbox::Mailbox;

/// A multi-producer, single-consumer mailbox backed by a flume channel.
///
/// FIFO ordering is the channel's guarantee. The closed flag lives in a
/// separate watch channel so a parked consumer wakes on `close` without
/// being handed the envelopes still queued.
pub struct MpscMailbox<A: Actor> {
    sender: Sender<Envelope<A>>,
    receiver: Receiver<Envelope<A>>,
    capacity: Option<usize>,
    closed_tx: watch::Sender<bool>,
    closed_rx: watch::Receiver<bool>,
}

impl<A: Actor> MpscMailbox<A> {
    /// Creates an unbounded mailbox.
    pub fn unbounded() -> Self {
        let (sender, receiver) = flume::unbounded();
        Self::build(sender, receiver, None)
    }

    /// Creates a mailbox that holds at most `capacity` envelopes.
    pub fn bounded(capacity: usize) -> Self {
        let (sender, receiver) = flume::bounded(capacity);
        Self::build(sender, receiver, Some(capacity))
    }

    fn build(
        sender: Sender<Envelope<A>>,
        receiver: Receiver<Envelope<A>>,
        capacity: Option<usize>,
    ) -> Self {
        let (closed_tx, closed_rx) = watch::channel(false);
        Self {
            sender,
            receiver,
            capacity,
            closed_tx,
            closed_rx,
        }
    }

    fn full_error(&self) -> MailboxError {
        MailboxError::Full {
            capacity: self.capacity.unwrap_or(usize::MAX),
        }
    }
}

#[async_trait]
impl<A: Actor> Mailbox<A> for MpscMailbox<A> {
    async fn push(
        &self,
        envelope: Envelope<A>,
        strategy: BackpressureStrategy,
    ) -> Result<(), MailboxError> {
        if self.is_closed() {
            return Err(MailboxError::Closed);
        }
        match strategy {
            BackpressureStrategy::Block => self
                .sender
                .send_async(envelope)
                .await
                .map_err(|_| MailboxError::Closed),
            BackpressureStrategy::Error => match self.sender.try_send(envelope) {
                Ok(()) => Ok(()),
                Err(TrySendError::Full(_)) => Err(self.full_error()),
                Err(TrySendError::Disconnected(_)) => Err(MailboxError::Closed),
            },
            BackpressureStrategy::DropNewest => match self.sender.try_send(envelope) {
                Ok(()) => Ok(()),
                // At capacity the new envelope is discarded, as configured.
                Err(TrySendError::Full(_)) => Ok(()),
                Err(TrySendError::Disconnected(_)) => Err(MailboxError::Closed),
            },
        }
    }

    async fn pop(&self) -> Option<Envelope<A>> {
        let mut closed = self.closed_rx.clone();
        if *closed.borrow_and_update() {
            return None;
        }
        // Biased so a close wins over an envelope that raced it into the
        // queue; the shutdown drain picks such envelopes up instead.
        tokio::select! {
            biased;
            _ = closed.changed() => None,
            received = self.receiver.recv_async() => received.ok(),
        }
    }

    fn try_pop(&self) -> Option<Envelope<A>> {
        self.receiver.try_recv().ok()
    }

    fn len(&self) -> usize {
        self.receiver.len()
    }

    fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    fn close(&self) {
        let _ = self.closed_tx.send(true);
    }

    fn is_closed(&self) -> bool {
        *self.closed_rx.borrow()
    }
}
