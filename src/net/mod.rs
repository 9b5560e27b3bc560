//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls and `types` defines the shared wire schema.
//! The backend itself is an external deployment; nothing here holds state.

pub mod api;
pub mod types;
