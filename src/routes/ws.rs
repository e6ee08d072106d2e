//! WebSocket handler — envelope relay between editor windows.
//!
//! DESIGN
//! ======
//! On upgrade, generates a peer ID, joins the hub, and enters a `select!`
//! loop:
//! - Incoming text from the window → validate + relay to the other peers
//! - Envelopes relayed by other peers → forward to the window
//!
//! An invalid envelope is answered to its sender only and never relayed.

#[cfg(test)]
#[path = "ws_test.rs"]
mod ws_test;

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::hub::Hub;
use crate::state::AppState;

pub async fn handle_ws(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| run_ws(socket, state))
}

async fn run_ws(mut socket: WebSocket, state: AppState) {
    let peer_id = Uuid::new_v4();

    // Per-connection channel for envelopes relayed from other peers.
    let (peer_tx, mut peer_rx) = mpsc::channel::<String>(state.config.peer_channel_capacity);
    state.hub.join(peer_id, peer_tx).await;

    let peers = state.hub.peer_count().await;
    info!(%peer_id, peers, "ws: peer connected");

    loop {
        tokio::select! {
            msg = socket.recv() => {
                let Some(Ok(msg)) = msg else { break };
                match msg {
                    Message::Text(text) => {
                        if let Some(reply) = process_inbound_text(&state.hub, peer_id, text.as_str()).await {
                            if socket.send(Message::Text(reply.into())).await.is_err() {
                                break;
                            }
                        }
                    }
                    Message::Close(_) => break,
                    _ => {}
                }
            }
            Some(envelope) = peer_rx.recv() => {
                if socket.send(Message::Text(envelope.into())).await.is_err() {
                    break;
                }
            }
        }
    }

    state.hub.leave(peer_id).await;
    info!(%peer_id, "ws: peer disconnected");
}

/// Relay one inbound envelope and return the text to send back to its
/// origin, if any.
///
/// Kept apart from the socket loop so tests can drive relay behavior
/// without a live connection.
async fn process_inbound_text(hub: &Hub, peer_id: Uuid, text: &str) -> Option<String> {
    match hub.relay(Some(peer_id), text).await {
        Ok(reached) => {
            debug!(%peer_id, reached, "ws: relayed envelope");
            None
        }
        Err(e) => {
            warn!(%peer_id, error = %e, "ws: invalid inbound envelope");
            Some(error_reply(&e.to_string()))
        }
    }
}

fn error_reply(message: &str) -> String {
    serde_json::json!({ "type": "error", "payload": { "message": message } }).to_string()
}
