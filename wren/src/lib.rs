//! # Wren
//!
//! A single-consumer, typed actor runtime. Each actor owns one FIFO mailbox
//! and one tokio task that drains it, so handler invocations for a single
//! actor never overlap while distinct actors run in parallel. Two delivery
//! modes are supported: `tell` (fire-and-forget) and `ask` (request/reply
//! through an awaitable handle).
//!
//! ## Module Organization
//!
//! - [`handle`]: the user-facing [`ActorHandle`] (lifecycle + submission)
//! - [`mailbox`]: the [`Mailbox`] trait and its flume-backed MPSC
//!   implementation
//! - [`envelope`]: payload plus optional reply continuation
//! - [`config`]: per-actor mailbox and naming configuration
//! - [`observer`]: injected sink for handler failures with no reply path
//! - [`logging`]: `tracing` subscriber bootstrap
//!
//! The contract layer lives in `wren-api` and is re-exported here, so
//! depending on `wren` alone is enough.
//!
//! ## Usage Example
//!
//! ```
//! use async_trait::async_trait;
//! use wren::{Actor, ActorConfig, ActorHandle, ActorResult, ReplyToken};
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
//!
//! #[tokio::main]
//! async fn main() -> ActorResult<()> {
//!     let handle = ActorHandle::new(Greeter, ActorConfig::default());
//!     handle.start()?;
//!     handle.tell("hi".to_string()).await?;
//!     let ack = handle.ask("there".to_string()).await?.await?;
//!     assert_eq!(ack, "Received: there");
//!     handle.stop();
//!     handle.terminated().await;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod envelope;
pub mod error;
pub mod handle;
pub mod logging;
pub mod mailbox;
pub mod observer;
mod processor;

pub use config::{ActorConfig, BackpressureStrategy};
pub use envelope::Envelope;
pub use error::MailboxError;
pub use handle::ActorHandle;
pub use mailbox::{Mailbox, MpscMailbox};
pub use observer::{FailureObserver, TracingObserver};

// Re-export the contract layer.
pub use wren_api::{
    actor::{Actor, ActorState},
    ask::AskHandle,
    errors::ActorError,
    reply::{reply_channel, PendingReply, ReplyToken},
    types::{ActorResult, MessageId},
};
