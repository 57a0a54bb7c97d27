//! Reactive state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and components read these signals; they never touch storage or the
//! session services' internals directly.

pub mod session;
