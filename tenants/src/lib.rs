//! Shared tenant model and console logic for the super admin surfaces.
//!
//! This crate owns the wire representation of hospital tenants used by both
//! the browser `client` and the `cli`. It also holds the pure pieces of the
//! console flow (session holder, optimistic roster, response classification)
//! so both front ends behave identically and can be tested without a browser.

pub mod endpoints;
pub mod error;
pub mod features;
pub mod hospital;
pub mod outcome;
pub mod roster;
pub mod session;
pub mod wire;

pub use error::ApiError;
pub use features::{FeatureFlags, FeatureKey, UnknownFeature};
pub use hospital::{Address, Contact, Hospital};
pub use outcome::{ListOutcome, LoginOutcome};
pub use roster::{HospitalRoster, PendingToggle, Rollback};
pub use session::{MemoryTokenStore, Session, StoreError, TOKEN_STORAGE_KEY, TokenStore, View};
