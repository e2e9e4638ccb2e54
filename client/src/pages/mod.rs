//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `console` is the only route; it picks `login` or `dashboard` from the
//! session state. Each page owns its orchestration and delegates table
//! rendering to `components`.

pub mod console;
pub mod dashboard;
pub mod login;
