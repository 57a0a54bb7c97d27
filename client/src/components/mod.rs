//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session snapshot from context; `protected` is the only
//! one that decides navigation.

pub mod dashboard_header;
pub mod login_form;
pub mod protected;
