//! Reactive state wrappers provided via Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` mirrors the persisted token and picks the visible view;
//! `hospitals` holds the dashboard roster plus its loading/error flags.

pub mod hospitals;
pub mod session;
