//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and session
//! logic so the latter stay testable natively.

pub mod navigate;
