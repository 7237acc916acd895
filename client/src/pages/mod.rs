//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is mounted by exactly one entry in [`crate::routes`] and the
//! matching `<Route>` in [`crate::app::App`].

pub mod dashboard;
