//! The smallest useful wren actor: a note-taking actor that writes every
//! note through an injected sink and acknowledges asks.
//!
//! Run with `cargo run --example echo`.

use std::sync::Arc;
use std::time::SystemTime;

use async_trait::async_trait;
use uuid::Uuid;
use wren::{logging, Actor, ActorConfig, ActorHandle, ActorResult, ReplyToken};

/// A free-form note. The id and timestamp exist for log correlation.
#[derive(Debug, Clone)]
struct Note {
    id: Uuid,
    text: String,
    timestamp: SystemTime,
}

impl Note {
    fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            timestamp: SystemTime::now(),
        }
    }
}

/// Where handled notes go. Injected so the actor carries no ambient console
/// state.
trait NoteSink: Send + Sync {
    fn write(&self, note: &Note);
}

struct StdoutSink;

impl NoteSink for StdoutSink {
    fn write(&self, note: &Note) {
        println!("{}", note.text);
        tracing::debug!(note = %note.id, at = ?note.timestamp, "note written");
    }
}

struct NoteActor {
    sink: Arc<dyn NoteSink>,
}

#[async_trait]
impl Actor for NoteActor {
    type Msg = Note;
    type Reply = String;

    async fn handle(&mut self, note: Note) -> ActorResult<()> {
        self.sink.write(&note);
        Ok(())
    }

    async fn handle_request(&mut self, note: Note, reply: ReplyToken<String>) -> ActorResult<()> {
        self.sink.write(&note);
        let ack = format!("Received: {}", note.text);
        reply.send(ack)?;
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_default();

    let actor = NoteActor {
        sink: Arc::new(StdoutSink),
    };
    let handle = ActorHandle::new(actor, ActorConfig::named("notes"));
    handle.start()?;

    handle.tell(Note::new("hi")).await?;
    handle.tell(Note::new("there")).await?;

    let ack = handle.ask(Note::new("hi")).await?.await?;
    println!("{ack}");

    handle.stop();
    handle.terminated().await;
    Ok(())
}
