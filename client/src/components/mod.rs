//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `flex_box` renders layout containers on the design canvas; the
//! `property_*` modules render the rows of the property panel that edit them.

pub mod flex_box;
pub mod property_input;
pub mod property_item;
pub mod property_item_number;
