//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped state (search terms, filter forms, image
//! modal) and delegates rendering details to `components`.

pub mod advanced;
pub mod home;
pub mod results;
