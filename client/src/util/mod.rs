//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser APIs (`localStorage`, `alert`) from page
//! logic so the pages compile and test natively without a window.

pub mod notify;
pub mod storage;
