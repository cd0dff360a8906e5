/// Defines the behavior when `push` is called on a full mailbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackpressureStrategy {
    /// The `push` operation will asynchronously wait until space becomes
    /// available.
    Block,
    /// The `push` operation will immediately return a `MailboxError::Full`
    /// error.
    Error,
    /// The new message being pushed will be dropped. An ask dropped this way
    /// resolves as cancelled.
    DropNewest,
}

/// Configuration for an individual actor.
#[derive(Clone, Debug)]
pub struct ActorConfig {
    /// Name used in logs and spans. Generated from a UUID when absent.
    pub name: Option<String>,

    /// The capacity of this actor's mailbox. `None` means unbounded.
    pub mailbox_capacity: Option<usize>,

    /// The backpressure strategy for this actor's mailbox. Only observable
    /// with a bounded mailbox.
    pub backpressure: BackpressureStrategy,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            name: None,
            mailbox_capacity: None,
            backpressure: BackpressureStrategy::Block,
        }
    }
}

impl ActorConfig {
    /// Default configuration with a log-friendly name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Bounded mailbox with the given capacity and backpressure behavior.
    pub fn bounded(capacity: usize, backpressure: BackpressureStrategy) -> Self {
        Self {
            name: None,
            mailbox_capacity: Some(capacity),
            backpressure,
        }
    }
}
