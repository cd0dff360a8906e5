//! # Wren Actor API
//!
//! Wren is a minimal typed actor model: each actor owns one mailbox and one
//! sequential execution context, and accepts messages of a single type in two
//! delivery modes. `tell` is fire-and-forget; `ask` carries a one-shot reply
//! continuation and hands the caller an awaitable handle for the result.
//!
//! ## Design Principles
//!
//! - **Type Safety**: an actor declares its message and reply types as
//!   associated types; there is no type erasure at the API boundary.
//! - **Sequential Handlers**: handler invocations for one actor never
//!   overlap, so handler state needs no synchronization.
//! - **Write-Once Replies**: the reply continuation is consumed by `send`,
//!   making a double reply unrepresentable rather than merely forbidden.
//! - **Explicit Outcomes**: an ask resolves exactly once, with the reply,
//!   with [`ActorError::Cancelled`], or with [`ActorError::HandlerFailed`].
//!
//! ## Module Organization
//!
//! - [`actor`]: the [`Actor`] trait and lifecycle states
//! - [`ask`]: the awaitable [`AskHandle`]
//! - [`reply`]: reply continuations shared between handler and runtime
//! - [`errors`]: the error taxonomy
//! - [`types`]: common aliases
//!
//! ## Usage Example
//!
//! ```
//! use async_trait::async_trait;
//! use wren_api::{Actor, ActorResult, ReplyToken};
//!
//! struct Greeter;
//!
//! #[async_trait]
//! impl Actor for Greeter {
//!     type Msg = String;
//!     type Reply = String;
//!
//!     async fn handle(&mut self, msg: String) -> ActorResult<()> {
//!         println!("{msg}");
//!         Ok(())
//!     }
//!
//!     async fn handle_request(&mut self, msg: String, reply: ReplyToken<String>) -> ActorResult<()> {
//!         reply.send(format!("Received: {msg}"))?;
//!         Ok(())
//!     }
//! }
//! ```

pub mod actor;
pub mod ask;
pub mod errors;
pub mod reply;
pub mod types;

pub use actor::{Actor, ActorState};
pub use ask::AskHandle;
pub use errors::ActorError;
pub use reply::{reply_channel, PendingReply, ReplyToken};
pub use types::{ActorResult, MessageId};
