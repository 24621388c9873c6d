//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the search form widgets and result-page chrome while
//! reading/writing page-owned state from Leptos context providers.

pub mod applied_terms_bar;
pub mod color_selector;
pub mod image_modal;
pub mod manufacturer_select;
pub mod pagination;
pub mod result_card;
pub mod search_terms_panel;
pub mod shape_selector;
pub mod sort_select;
pub mod term_entry_modal;
