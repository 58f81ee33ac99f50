//! Networking for the catalog search endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds and issues the request, `types` defines the response schema,
//! and `error` is the failure taxonomy surfaced to the view.

pub mod api;
pub mod error;
pub mod types;
