use thiserror::Error;
use wren_api::errors::ActorError;

/// Errors related to mailbox operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MailboxError {
    #[error("mailbox is full (capacity: {capacity})")]
    Full { capacity: usize },
    #[error("mailbox is closed")]
    Closed,
}

impl From<MailboxError> for ActorError {
    fn from(err: MailboxError) -> Self {
        match err {
            MailboxError::Full { capacity } => ActorError::MailboxFull { capacity },
            MailboxError::Closed => ActorError::Stopped,
        }
    }
}
