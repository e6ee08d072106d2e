//! Envelope relay between connected editor windows.
//!
//! DESIGN
//! ======
//! Each WebSocket connection registers as a peer with a bounded channel of
//! outgoing envelope text. The hub validates every envelope before relaying
//! it, but forwards the original text untouched so peers see exactly what
//! the origin sent. Delivery is best-effort: a peer that cannot keep up is
//! skipped rather than allowed to stall the others.

#[cfg(test)]
#[path = "hub_test.rs"]
mod hub_test;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use envelopes::{Handler, HandlerRegistry, Message, MessageType, Sender, SenderError, decode_envelope, encode_envelope};
use tokio::sync::{RwLock, mpsc};
use tracing::warn;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct Hub {
    peers: Arc<RwLock<HashMap<Uuid, mpsc::Sender<String>>>>,
    registry: HandlerRegistry,
}

impl Hub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn join(&self, peer_id: Uuid, tx: mpsc::Sender<String>) {
        self.peers.write().await.insert(peer_id, tx);
    }

    pub async fn leave(&self, peer_id: Uuid) {
        self.peers.write().await.remove(&peer_id);
    }

    pub async fn peer_count(&self) -> usize {
        self.peers.read().await.len()
    }

    /// Validate `envelope`, forward it to every peer except `origin`, then
    /// run hub-side handlers. Returns the number of peers it reached.
    ///
    /// # Errors
    ///
    /// Returns [`SenderError::Envelope`] without relaying if the text is not a
    /// valid envelope.
    pub async fn relay(&self, origin: Option<Uuid>, envelope: &str) -> Result<usize, SenderError> {
        let message = decode_envelope(envelope)?;
        let reached = self.broadcast(envelope, origin).await;
        self.registry.dispatch(&message).await;
        Ok(reached)
    }

    async fn broadcast(&self, envelope: &str, exclude: Option<Uuid>) -> usize {
        let peers = self.peers.read().await;
        let mut reached = 0;

        for (peer_id, tx) in peers.iter() {
            if exclude == Some(*peer_id) {
                continue;
            }
            match tx.try_send(envelope.to_owned()) {
                Ok(()) => reached += 1,
                Err(e) => warn!(%peer_id, error = %e, "hub: dropped envelope for peer"),
            }
        }
        reached
    }
}

#[async_trait]
impl Sender for Hub {
    async fn match_type(&self, kind: MessageType, handler: Handler) -> Result<(), SenderError> {
        self.registry.register(kind, handler).await;
        Ok(())
    }

    async fn send(&self, message: Message) -> Result<(), SenderError> {
        let envelope = encode_envelope(&message)?;
        self.broadcast(&envelope, None).await;
        self.registry.dispatch(&message).await;
        Ok(())
    }

    async fn pass(&self, envelope: &str) -> Result<(), SenderError> {
        self.relay(None, envelope).await.map(|_| ())
    }
}
