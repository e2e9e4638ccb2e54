//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the tenant table and its toggle cells; the dashboard
//! page owns state and passes callbacks down.

pub mod feature_toggle;
pub mod hospital_table;
