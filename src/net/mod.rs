//! Networking for the update-all action.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the request and interprets the reply; `types` defines the
//! wire schema and error taxonomy.

pub mod api;
pub mod types;
