//! Two actors volleying asks through their handles.
//!
//! Run with `cargo run --example ping_pong`.

use async_trait::async_trait;
use wren::{logging, Actor, ActorConfig, ActorHandle, ActorResult, ReplyToken};

struct PingActor {
    count: u32,
}

#[async_trait]
impl Actor for PingActor {
    type Msg = u32;
    type Reply = String;

    async fn handle(&mut self, n: u32) -> ActorResult<()> {
        self.count += 1;
        println!("ping actor saw {n}");
        Ok(())
    }

    async fn handle_request(&mut self, n: u32, reply: ReplyToken<String>) -> ActorResult<()> {
        self.count += 1;
        reply.send(format!("ping {} (total {})", n, self.count))?;
        Ok(())
    }
}

struct PongActor {
    count: u32,
}

#[async_trait]
impl Actor for PongActor {
    type Msg = u32;
    type Reply = String;

    async fn handle(&mut self, n: u32) -> ActorResult<()> {
        self.count += 1;
        println!("pong actor saw {n}");
        Ok(())
    }

    async fn handle_request(&mut self, n: u32, reply: ReplyToken<String>) -> ActorResult<()> {
        self.count += 1;
        reply.send(format!("pong {} (total {})", n, self.count))?;
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_default();

    let ping = ActorHandle::new(PingActor { count: 0 }, ActorConfig::named("ping"));
    let pong = ActorHandle::new(PongActor { count: 0 }, ActorConfig::named("pong"));
    ping.start()?;
    pong.start()?;

    for i in 0..5 {
        let ping_reply = ping.ask(i).await?.await?;
        println!("{ping_reply}");

        let pong_reply = pong.ask(i).await?.await?;
        println!("{pong_reply}");
    }

    ping.stop();
    pong.stop();
    ping.terminated().await;
    pong.terminated().await;
    Ok(())
}
