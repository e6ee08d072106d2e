//! Message model, envelope codec, and the `Sender` contract shared by the hub
//! and editor windows.
//!
//! This crate owns the wire representation of editor messages. A message is a
//! tagged union; an envelope is its JSON text. Payloads that belong to other
//! crates (layout objects, property values) travel as `serde_json::Value` so
//! this crate stays free of UI dependencies.

pub mod local;
pub mod message;
pub mod sender;

pub use local::LocalSender;
pub use message::{EnvelopeError, Message, MessageType, decode_envelope, encode_envelope};
pub use sender::{Handler, HandlerRegistry, Sender, SenderError, handler};
