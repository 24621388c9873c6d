//! Networking modules for the result page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` loads result pages from the host's `/api/search` endpoint and
//! `types` defines the result schema shared with the host.

pub mod api;
pub mod types;
