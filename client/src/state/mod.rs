//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (search terms, filter forms, modal) so each page
//! owns small focused models and hands them to components through context.

pub mod filters;
pub mod modal;
pub mod search_terms;
