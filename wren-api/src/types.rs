use uuid::Uuid;

use crate::errors::ActorError;

/// Unique identifier attached to every envelope, used for log correlation.
pub type MessageId = Uuid;

/// Result alias used across the actor API.
pub type ActorResult<T> = Result<T, ActorError>;
