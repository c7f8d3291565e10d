//! Networking modules for the REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles HTTP calls (including the one-shot refresh-and-retry rule
//! for authenticated endpoints) and `types` defines the shared wire schema.

pub mod api;
pub mod types;
