use tokio::time::{Duration, timeout};

use super::*;

async fn register_two_peers(hub: &Hub) -> ((Uuid, mpsc::Receiver<String>), (Uuid, mpsc::Receiver<String>)) {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let (tx_a, rx_a) = mpsc::channel(8);
    let (tx_b, rx_b) = mpsc::channel(8);
    hub.join(a, tx_a).await;
    hub.join(b, tx_b).await;
    ((a, rx_a), (b, rx_b))
}

#[tokio::test]
async fn valid_envelope_is_relayed_without_reply() {
    let hub = Hub::new();
    let ((a, mut rx_a), (_b, mut rx_b)) = register_two_peers(&hub).await;
    let text = r#"{"type":"property-changed","payload":{"elementId":"el-1","property":"width","value":120}}"#;

    let reply = process_inbound_text(&hub, a, text).await;

    assert!(reply.is_none());
    let relayed = timeout(Duration::from_millis(200), rx_b.recv())
        .await
        .expect("relay timed out")
        .expect("channel closed");
    assert_eq!(relayed, text);
    assert!(rx_a.try_recv().is_err());
}

#[tokio::test]
async fn invalid_envelope_is_answered_to_sender_only() {
    let hub = Hub::new();
    let ((a, _rx_a), (_b, mut rx_b)) = register_two_peers(&hub).await;

    let reply = process_inbound_text(&hub, a, "{broken").await.expect("error reply");

    let value: serde_json::Value = serde_json::from_str(&reply).expect("json reply");
    assert_eq!(value["type"], "error");
    assert!(
        value["payload"]["message"]
            .as_str()
            .is_some_and(|m| m.starts_with("invalid envelope"))
    );
    assert!(rx_b.try_recv().is_err());
}

#[test]
fn error_reply_escapes_message_text() {
    let reply = error_reply(r#"bad "quote""#);
    let value: serde_json::Value = serde_json::from_str(&reply).expect("json reply");
    assert_eq!(value["payload"]["message"], r#"bad "quote""#);
}
