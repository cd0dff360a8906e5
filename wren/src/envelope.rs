use std::fmt;

use uuid::Uuid;
use wren_api::actor::Actor;
use wren_api::reply::PendingReply;
use wren_api::types::MessageId;

/// A queued message together with its optional reply continuation.
///
/// An envelope carries no continuation (fire-and-forget) or exactly one
/// (request/reply); dispatch branches on its presence.
pub struct Envelope<A: Actor> {
    /// Identifier for log correlation.
    pub id: MessageId,
    /// The message payload.
    pub payload: A::Msg,
    /// The reply continuation, present only for request/reply envelopes.
    pub reply: Option<PendingReply<A::Reply>>,
}

impl<A: Actor> Envelope<A> {
    /// Wraps a fire-and-forget message.
    pub fn tell(payload: A::Msg) -> Self {
        Self {
            id: Uuid::new_v4(),
            payload,
            reply: None,
        }
    }

    /// Wraps a request/reply message.
    pub fn request(payload: A::Msg, reply: PendingReply<A::Reply>) -> Self {
        Self {
            id: Uuid::new_v4(),
            payload,
            reply: Some(reply),
        }
    }

    /// Whether this envelope carries a reply continuation.
    pub fn is_request(&self) -> bool {
        self.reply.is_some()
    }
}

impl<A: Actor> fmt::Debug for Envelope<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Envelope")
            .field("id", &self.id)
            .field("payload", &"<opaque>")
            .field("reply", &self.reply.as_ref().map(|_| "<pending-reply>"))
            .finish()
    }
}
