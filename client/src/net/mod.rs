//! Networking modules for the external backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the three console calls; request/response shapes live in
//! the shared `tenants::wire` module.

pub mod api;
