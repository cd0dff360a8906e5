use std::sync::Arc;

use tracing::{debug, error};
use wren_api::actor::{Actor, ActorState};
use wren_api::errors::ActorError;

use crate::envelope::Envelope;
use crate::handle::StateCell;
use crate::mailbox::Mailbox;
use crate::observer::FailureObserver;

/// Drives a single actor: drains the mailbox in arrival order and invokes
/// exactly one handler at a time.
pub(crate) struct ActorProcessor<A: Actor> {
    actor: A,
    name: String,
    mailbox: Arc<dyn Mailbox<A>>,
    observer: Arc<dyn FailureObserver>,
    state: Arc<StateCell>,
}

impl<A: Actor> ActorProcessor<A> {
    pub(crate) fn new(
        actor: A,
        name: String,
        mailbox: Arc<dyn Mailbox<A>>,
        observer: Arc<dyn FailureObserver>,
        state: Arc<StateCell>,
    ) -> Self {
        Self {
            actor,
            name,
            mailbox,
            observer,
            state,
        }
    }

    /// Runs until the mailbox closes. Consumes the processor.
    pub(crate) async fn run(mut self) {
        if let Err(failure) = self.actor.started().await {
            error!(actor = %self.name, error = %failure, "start hook failed, stopping actor");
            self.mailbox.close();
            self.discard_queued();
            self.state.set(ActorState::Stopped);
            return;
        }
        debug!(actor = %self.name, "actor active");

        while let Some(envelope) = self.mailbox.pop().await {
            self.dispatch(envelope).await;
        }

        // A close can race a final enqueue; whatever is left is discarded
        // and its pending asks resolve as cancelled.
        self.discard_queued();
        self.actor.stopped().await;
        self.state.set(ActorState::Stopped);
        debug!(actor = %self.name, "actor stopped");
    }

    async fn dispatch(&mut self, envelope: Envelope<A>) {
        let Envelope { id, payload, reply } = envelope;
        match reply {
            None => {
                debug!(actor = %self.name, envelope = %id, "handling tell");
                if let Err(failure) = self.actor.handle(payload).await {
                    self.observer.on_handler_failure(&self.name, &failure);
                }
            }
            Some(pending) => {
                debug!(actor = %self.name, envelope = %id, "handling ask");
                let token = pending.token();
                match self.actor.handle_request(payload, token).await {
                    Ok(()) => drop(pending),
                    Err(failure) => {
                        self.observer.on_handler_failure(&self.name, &failure);
                        pending.fail(ActorError::handler_failed(failure));
                    }
                }
            }
        }
    }

    fn discard_queued(&self) {
        let mut discarded = 0usize;
        while let Some(envelope) = self.mailbox.try_pop() {
            drop(envelope);
            discarded += 1;
        }
        if discarded > 0 {
            debug!(actor = %self.name, discarded, "discarded queued envelopes at stop");
        }
    }
}
