use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use wren::{Actor, ActorConfig, ActorHandle, ActorResult, ReplyToken};

/// Records every payload it sees; asks double as barriers that report how
/// many messages have been handled so far.
struct Recorder {
    seen: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl Actor for Recorder {
    type Msg = String;
    type Reply = usize;

    async fn handle(&mut self, msg: String) -> ActorResult<()> {
        self.seen.lock().unwrap().push(msg);
        Ok(())
    }

    async fn handle_request(&mut self, msg: String, reply: ReplyToken<usize>) -> ActorResult<()> {
        let count = {
            let mut seen = self.seen.lock().unwrap();
            seen.push(msg);
            seen.len()
        };
        reply.send(count)?;
        Ok(())
    }
}

#[tokio::test]
async fn tell_preserves_submission_order() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let handle = ActorHandle::new(Recorder { seen: seen.clone() }, ActorConfig::default());
    handle.start().unwrap();

    handle.tell("hi".to_string()).await.unwrap();
    handle.tell("there".to_string()).await.unwrap();
    // An ask at the tail doubles as a barrier: FIFO means everything before
    // it has been handled once the reply arrives.
    let count = handle.ask("done".to_string()).await.unwrap().await.unwrap();

    assert_eq!(count, 3);
    assert_eq!(*seen.lock().unwrap(), ["hi", "there", "done"]);
    handle.stop();
}

#[tokio::test]
async fn mixed_tell_ask_fifo() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let handle = ActorHandle::new(Recorder { seen: seen.clone() }, ActorConfig::default());
    handle.start().unwrap();

    handle.tell("a".to_string()).await.unwrap();
    let b = handle.ask("b".to_string()).await.unwrap();
    handle.tell("c".to_string()).await.unwrap();
    let d = handle.ask("d".to_string()).await.unwrap();

    // The ask interleaved among tells observes exactly the messages ahead
    // of it.
    assert_eq!(b.await.unwrap(), 2);
    assert_eq!(d.await.unwrap(), 4);
    assert_eq!(*seen.lock().unwrap(), ["a", "b", "c", "d"]);
    handle.stop();
}

/// Messages tagged with (producer, sequence) pairs; asks reply the number
/// handled so far without recording anything.
struct TaggedRecorder {
    seen: Arc<Mutex<Vec<(usize, usize)>>>,
}

#[async_trait]
impl Actor for TaggedRecorder {
    type Msg = (usize, usize);
    type Reply = usize;

    async fn handle(&mut self, msg: (usize, usize)) -> ActorResult<()> {
        self.seen.lock().unwrap().push(msg);
        Ok(())
    }

    async fn handle_request(
        &mut self,
        _msg: (usize, usize),
        reply: ReplyToken<usize>,
    ) -> ActorResult<()> {
        let count = self.seen.lock().unwrap().len();
        reply.send(count)?;
        Ok(())
    }
}

#[tokio::test]
async fn per_producer_order_survives_concurrent_submission() {
    const PRODUCERS: usize = 4;
    const PER_PRODUCER: usize = 50;

    let seen = Arc::new(Mutex::new(Vec::new()));
    let handle = ActorHandle::new(TaggedRecorder { seen: seen.clone() }, ActorConfig::default());
    handle.start().unwrap();

    let producers = (0..PRODUCERS).map(|p| {
        let handle = handle.clone();
        tokio::spawn(async move {
            for j in 0..PER_PRODUCER {
                handle.tell((p, j)).await.unwrap();
            }
        })
    });
    join_all(producers).await;

    let count = handle.ask((0, 0)).await.unwrap().await.unwrap();
    assert_eq!(count, PRODUCERS * PER_PRODUCER);

    // Cross-producer interleaving is arbitrary; each producer's own
    // sequence must come out in submission order.
    let seen = seen.lock().unwrap();
    for p in 0..PRODUCERS {
        let sequence: Vec<usize> = seen.iter().filter(|(q, _)| *q == p).map(|(_, j)| *j).collect();
        let expected: Vec<usize> = (0..PER_PRODUCER).collect();
        assert_eq!(sequence, expected, "producer {p} was reordered");
    }
    handle.stop();
}

/// Tracks how many handler invocations are in progress at once.
struct Exclusive {
    in_flight: Arc<AtomicUsize>,
    max_seen: Arc<AtomicUsize>,
}

impl Exclusive {
    async fn enter_and_exit(&self) {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_seen.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(2)).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl Actor for Exclusive {
    type Msg = u32;
    type Reply = ();

    async fn handle(&mut self, _msg: u32) -> ActorResult<()> {
        self.enter_and_exit().await;
        Ok(())
    }

    async fn handle_request(&mut self, _msg: u32, reply: ReplyToken<()>) -> ActorResult<()> {
        self.enter_and_exit().await;
        reply.send(())?;
        Ok(())
    }
}

#[tokio::test]
async fn handlers_never_overlap() {
    let in_flight = Arc::new(AtomicUsize::new(0));
    let max_seen = Arc::new(AtomicUsize::new(0));
    let handle = ActorHandle::new(
        Exclusive {
            in_flight: in_flight.clone(),
            max_seen: max_seen.clone(),
        },
        ActorConfig::default(),
    );
    handle.start().unwrap();

    let producers = (0..4).map(|_| {
        let handle = handle.clone();
        tokio::spawn(async move {
            for i in 0..5 {
                handle.tell(i).await.unwrap();
            }
        })
    });
    join_all(producers).await;

    handle.ask(0).await.unwrap().await.unwrap();
    assert_eq!(max_seen.load(Ordering::SeqCst), 1);
    handle.stop();
}
