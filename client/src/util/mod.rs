//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep style derivation, value formatting, and message
//! building free of DOM concerns so they can be unit tested directly.

pub mod box_style;
pub mod layout;
pub mod message_emit;
pub mod number_input;
