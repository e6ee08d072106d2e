//! # client
//!
//! Leptos component library for the flexkit design editor: the `FlexBox`
//! layout primitive and the property editor rows that edit it.
//!
//! Style and value derivations live in `util` as plain functions; the
//! components in `components` are thin wrappers over them.

pub mod components;
pub mod util;
