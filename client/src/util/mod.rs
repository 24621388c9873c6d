//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate URL handling and browser navigation from page and
//! component logic to improve reuse and testability.

pub mod catalog;
pub mod navigation;
pub mod query;
