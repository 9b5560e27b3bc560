//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chrome and shared fragments while reading session state
//! from the Leptos context provider; pages own the per-route orchestration.

pub mod confirm_dialog;
pub mod eventos_list;
pub mod layout;
pub mod protected;
