use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;
use tracing::{debug, info_span, Instrument};
use uuid::Uuid;
use wren_api::actor::{Actor, ActorState};
use wren_api::ask::AskHandle;
use wren_api::errors::ActorError;
use wren_api::reply::reply_channel;
use wren_api::types::ActorResult;

use crate::config::{ActorConfig, BackpressureStrategy};
use crate::envelope::Envelope;
use crate::mailbox::{Mailbox, MpscMailbox};
use crate::observer::{FailureObserver, TracingObserver};
use crate::processor::ActorProcessor;

/// Shared lifecycle flag, readable without taking the lifecycle lock.
pub(crate) struct StateCell(AtomicU8);

impl StateCell {
    fn new(state: ActorState) -> Self {
        Self(AtomicU8::new(state as u8))
    }

    pub(crate) fn set(&self, state: ActorState) {
        self.0.store(state as u8, Ordering::SeqCst);
    }

    fn get(&self) -> ActorState {
        match self.0.load(Ordering::SeqCst) {
            0 => ActorState::Created,
            1 => ActorState::Active,
            _ => ActorState::Stopped,
        }
    }
}

/// Seed and task slots guarded by one lock so lifecycle transitions
/// serialize.
struct Lifecycle<A: Actor> {
    seed: Option<A>,
    join: Option<JoinHandle<()>>,
}

struct HandleInner<A: Actor> {
    name: String,
    state: Arc<StateCell>,
    mailbox: Arc<dyn Mailbox<A>>,
    backpressure: BackpressureStrategy,
    observer: Arc<dyn FailureObserver>,
    lifecycle: Mutex<Lifecycle<A>>,
}

impl<A: Actor> Drop for HandleInner<A> {
    fn drop(&mut self) {
        // Last handle gone: nobody can submit or stop explicitly anymore, so
        // the processor is told to wind down instead of parking forever.
        self.mailbox.close();
    }
}

/// Cloneable handle combining lifecycle control and message submission for
/// one actor instance.
///
/// Many producers may clone the handle and submit concurrently; the actor
/// behind it processes envelopes strictly in arrival order, one at a time.
/// Envelopes submitted while the actor is still `Created` are buffered and
/// processed once it starts. When the last clone is dropped the actor winds
/// down as if stopped.
pub struct ActorHandle<A: Actor> {
    inner: Arc<HandleInner<A>>,
}

impl<A: Actor> Clone for ActorHandle<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: Actor> ActorHandle<A> {
    /// Creates an actor with the default `tracing` failure observer.
    pub fn new(actor: A, config: ActorConfig) -> Self {
        Self::with_observer(actor, config, Arc::new(TracingObserver))
    }

    /// Creates an actor reporting handler failures to `observer`.
    pub fn with_observer(
        actor: A,
        config: ActorConfig,
        observer: Arc<dyn FailureObserver>,
    ) -> Self {
        let mailbox: Arc<dyn Mailbox<A>> = match config.mailbox_capacity {
            Some(capacity) => Arc::new(MpscMailbox::bounded(capacity)),
            None => Arc::new(MpscMailbox::unbounded()),
        };
        let name = config.name.unwrap_or_else(generated_name);
        Self {
            inner: Arc::new(HandleInner {
                name,
                state: Arc::new(StateCell::new(ActorState::Created)),
                mailbox,
                backpressure: config.backpressure,
                observer,
                lifecycle: Mutex::new(Lifecycle {
                    seed: Some(actor),
                    join: None,
                }),
            }),
        }
    }

    /// Transitions the actor from `Created` to `Active` and begins draining
    /// its mailbox. Idempotent while the actor is active; fails with
    /// [`ActorError::Stopped`] once stopped.
    ///
    /// The processor task is spawned onto the ambient tokio runtime, so this
    /// must be called from within one.
    pub fn start(&self) -> ActorResult<()> {
        let mut lifecycle = self.lock_lifecycle();
        match self.inner.state.get() {
            ActorState::Active => Ok(()),
            ActorState::Stopped => Err(ActorError::Stopped),
            ActorState::Created => {
                let actor = match lifecycle.seed.take() {
                    Some(actor) => actor,
                    None => return Err(ActorError::Stopped),
                };
                let processor = ActorProcessor::new(
                    actor,
                    self.inner.name.clone(),
                    Arc::clone(&self.inner.mailbox),
                    Arc::clone(&self.inner.observer),
                    Arc::clone(&self.inner.state),
                );
                let span = info_span!("actor", name = %self.inner.name);
                lifecycle.join = Some(tokio::spawn(processor.run().instrument(span)));
                self.inner.state.set(ActorState::Active);
                debug!(actor = %self.inner.name, "actor started");
                Ok(())
            }
        }
    }

    /// Stops the actor. The in-flight handler invocation, if any, is allowed
    /// to finish; queued envelopes are discarded and their pending asks
    /// resolve as cancelled. Idempotent.
    pub fn stop(&self) {
        {
            let mut lifecycle = self.lock_lifecycle();
            lifecycle.seed = None;
            self.inner.state.set(ActorState::Stopped);
        }
        self.inner.mailbox.close();
        // An actor that never started has no processor to drain for it.
        while let Some(envelope) = self.inner.mailbox.try_pop() {
            drop(envelope);
        }
        debug!(actor = %self.inner.name, "stop requested");
    }

    /// Fire-and-forget submission. Returns once the envelope is enqueued;
    /// nothing is known about processing at that point.
    pub async fn tell(&self, msg: A::Msg) -> ActorResult<()> {
        self.ensure_accepting()?;
        self.inner
            .mailbox
            .push(Envelope::tell(msg), self.inner.backpressure)
            .await
            .map_err(ActorError::from)?;
        self.sweep_if_stopped();
        Ok(())
    }

    /// Request/reply submission. The returned handle resolves exactly once:
    /// with the reply, as cancelled, or as a handler failure.
    ///
    /// Under the `DropNewest` strategy an envelope discarded at capacity
    /// resolves its handle as cancelled.
    pub async fn ask(&self, msg: A::Msg) -> ActorResult<AskHandle<A::Reply>> {
        self.ensure_accepting()?;
        let (pending, handle) = reply_channel();
        self.inner
            .mailbox
            .push(Envelope::request(msg, pending), self.inner.backpressure)
            .await
            .map_err(ActorError::from)?;
        self.sweep_if_stopped();
        Ok(handle)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ActorState {
        self.inner.state.get()
    }

    /// Name used in logs and spans.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Waits for the processor task to finish. Returns immediately if the
    /// actor never started or termination was already awaited.
    pub async fn terminated(&self) {
        let join = self.lock_lifecycle().join.take();
        if let Some(join) = join {
            let _ = join.await;
        }
    }

    fn ensure_accepting(&self) -> ActorResult<()> {
        match self.inner.state.get() {
            ActorState::Stopped => Err(ActorError::Stopped),
            _ => Ok(()),
        }
    }

    fn sweep_if_stopped(&self) {
        // A push can race `stop`: the shutdown drain may already have run by
        // the time the envelope lands. Sweeping behind the push keeps a
        // stopped mailbox empty and resolves such asks as cancelled.
        if self.inner.state.get() == ActorState::Stopped {
            while let Some(envelope) = self.inner.mailbox.try_pop() {
                drop(envelope);
            }
        }
    }

    fn lock_lifecycle(&self) -> std::sync::MutexGuard<'_, Lifecycle<A>> {
        self.inner
            .lifecycle
            .lock()
            .expect("actor lifecycle lock poisoned")
    }
}

impl<A: Actor> fmt::Debug for ActorHandle<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActorHandle")
            .field("name", &self.inner.name)
            .field("state", &self.state())
            .finish()
    }
}

fn generated_name() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("wren-{}", &id[..8])
}
