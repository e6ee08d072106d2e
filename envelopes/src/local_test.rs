use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::sender::handler;

fn counting_handler() -> (Arc<AtomicUsize>, Handler) {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let h = handler(move |_message: &Message| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (hits, h)
}

fn selected(id: &str) -> Message {
    Message::ElementSelected { element_id: Some(id.to_owned()) }
}

#[tokio::test]
async fn send_without_transport_runs_local_handlers() {
    let sender = LocalSender::new();
    let (hits, h) = counting_handler();
    sender.match_type(MessageType::ElementSelected, h).await.expect("match");

    sender.send(selected("el-1")).await.expect("send");
    sender.send(Message::Heartbeat).await.expect("send");

    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn send_forwards_encoded_envelope_to_transport() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let sender = LocalSender::with_transport(tx);

    sender.send(selected("el-7")).await.expect("send");

    let envelope = rx.recv().await.expect("envelope");
    assert_eq!(decode_envelope(&envelope).expect("decode"), selected("el-7"));
}

#[tokio::test]
async fn send_reports_closed_transport() {
    let (tx, rx) = mpsc::unbounded_channel();
    drop(rx);
    let sender = LocalSender::with_transport(tx);
    let (hits, h) = counting_handler();
    sender.match_type(MessageType::Heartbeat, h).await.expect("match");

    let err = sender.send(Message::Heartbeat).await.expect_err("closed");
    assert!(matches!(err, SenderError::TransportClosed));
    // Forwarding happens first; a failed forward skips local handlers.
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn pass_dispatches_locally_without_touching_transport() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let sender = LocalSender::with_transport(tx);
    let (hits, h) = counting_handler();
    sender.match_type(MessageType::Heartbeat, h).await.expect("match");

    sender.pass(r#"{"type":"heartbeat"}"#).await.expect("pass");

    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn pass_rejects_invalid_envelope() {
    let sender = LocalSender::new();
    let (hits, h) = counting_handler();
    sender.match_type(MessageType::Heartbeat, h).await.expect("match");

    let err = sender.pass("{").await.expect_err("invalid");
    assert!(matches!(err, SenderError::Envelope(_)));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}
