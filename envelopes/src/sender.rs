//! The `Sender` capability and the handler registry behind it.
//!
//! ARCHITECTURE
//! ============
//! A sender exposes three operations: register a handler for one message
//! type, dispatch a typed message, and forward an already-serialized
//! envelope. Implementations decide where messages travel (an in-process
//! bus, a WebSocket hub); all of them share [`HandlerRegistry`] for local
//! handler dispatch.

#[cfg(test)]
#[path = "sender_test.rs"]
mod sender_test;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::message::{EnvelopeError, Message, MessageType};

/// Callback invoked with every dispatched message of its registered type.
pub type Handler = Arc<dyn Fn(&Message) + Send + Sync>;

/// Wrap a closure as a [`Handler`].
pub fn handler<F>(f: F) -> Handler
where
    F: Fn(&Message) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Error returned by [`Sender`] operations.
#[derive(Debug, thiserror::Error)]
pub enum SenderError {
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),
    /// The outbound transport was dropped.
    #[error("transport closed")]
    TransportClosed,
}

/// Message-passing capability shared by editor windows and the hub.
#[async_trait]
pub trait Sender: Send + Sync {
    /// Register `handler` for messages of type `kind`.
    ///
    /// Resolves once the handler is visible to subsequent dispatches.
    ///
    /// # Errors
    ///
    /// Implementations may reject registration; the provided ones never do.
    async fn match_type(&self, kind: MessageType, handler: Handler) -> Result<(), SenderError>;

    /// Dispatch a typed message.
    ///
    /// # Errors
    ///
    /// Returns [`SenderError`] if the message cannot be encoded or the
    /// transport is gone.
    async fn send(&self, message: Message) -> Result<(), SenderError>;

    /// Forward an opaque serialized envelope.
    ///
    /// # Errors
    ///
    /// Returns [`SenderError::Envelope`] if the text is not a valid envelope.
    async fn pass(&self, envelope: &str) -> Result<(), SenderError>;
}

/// Handlers keyed by message type, run in registration order.
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: Arc<RwLock<HashMap<MessageType, Vec<Handler>>>>,
}

impl HandlerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn register(&self, kind: MessageType, handler: Handler) {
        self.handlers.write().await.entry(kind).or_default().push(handler);
    }

    /// Number of handlers registered for `kind`.
    pub async fn count(&self, kind: MessageType) -> usize {
        self.handlers.read().await.get(&kind).map_or(0, Vec::len)
    }

    /// Run every handler registered for the message's type. Returns how many ran.
    ///
    /// The lock is released before handlers run, so a handler may register
    /// further handlers without deadlocking.
    pub async fn dispatch(&self, message: &Message) -> usize {
        let kind = message.message_type();
        let matched = {
            let handlers = self.handlers.read().await;
            handlers.get(&kind).cloned().unwrap_or_default()
        };

        if matched.is_empty() {
            tracing::debug!(%kind, "no handlers for message");
        }
        for handler in &matched {
            handler(message);
        }
        matched.len()
    }
}
