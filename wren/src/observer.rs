use wren_api::errors::ActorError;

/// Receives handler failures from the run loop.
///
/// A fire-and-forget handler has no reply path, so its failures are handed
/// to this collaborator instead of a caller. Request/reply failures are
/// reported here as well, in addition to resolving the pending ask. The
/// observer is injected at construction; nothing in the runtime reaches for
/// ambient global state.
pub trait FailureObserver: Send + Sync + 'static {
    /// Called from the actor's own execution context. Must not block for
    /// long; the next envelope is not dispatched until this returns.
    fn on_handler_failure(&self, actor: &str, error: &ActorError);
}

/// Default observer: failures become `tracing` error events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl FailureObserver for TracingObserver {
    fn on_handler_failure(&self, actor: &str, error: &ActorError) {
        tracing::error!(actor, error = %error, "handler failed");
    }
}
