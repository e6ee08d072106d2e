//! In-process sender for editor windows.
//!
//! `send` forwards the encoded envelope to the transport, when one is
//! attached, and then runs local handlers. `pass` only runs local handlers:
//! an envelope arriving from the transport is never echoed back onto it.

#[cfg(test)]
#[path = "local_test.rs"]
mod local_test;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::message::{Message, MessageType, decode_envelope, encode_envelope};
use crate::sender::{Handler, HandlerRegistry, Sender, SenderError};

#[derive(Clone, Default)]
pub struct LocalSender {
    registry: HandlerRegistry,
    transport: Option<mpsc::UnboundedSender<String>>,
}

impl LocalSender {
    /// Sender with no outbound transport; messages stay in process.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sender that also forwards every sent envelope to `transport`.
    #[must_use]
    pub fn with_transport(transport: mpsc::UnboundedSender<String>) -> Self {
        Self { registry: HandlerRegistry::new(), transport: Some(transport) }
    }

    #[must_use]
    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }
}

#[async_trait]
impl Sender for LocalSender {
    async fn match_type(&self, kind: MessageType, handler: Handler) -> Result<(), SenderError> {
        self.registry.register(kind, handler).await;
        Ok(())
    }

    /// Forwards to the transport first, then runs local handlers. If the
    /// transport is closed the error is returned and no handler runs.
    async fn send(&self, message: Message) -> Result<(), SenderError> {
        if let Some(transport) = &self.transport {
            let envelope = encode_envelope(&message)?;
            transport.send(envelope).map_err(|_| SenderError::TransportClosed)?;
        }
        self.registry.dispatch(&message).await;
        Ok(())
    }

    async fn pass(&self, envelope: &str) -> Result<(), SenderError> {
        let message = decode_envelope(envelope)?;
        self.registry.dispatch(&message).await;
        Ok(())
    }
}
