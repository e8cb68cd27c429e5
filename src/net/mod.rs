//! Networking modules for the Movizio REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds and dispatches authorized requests, `transport` is the
//! browser-only `gloo-net` layer under it, `movies` names the endpoints pages
//! call, and `types` defines the wire schema.

pub mod api;
pub mod movies;
#[cfg(feature = "csr")]
mod transport;
pub mod types;
