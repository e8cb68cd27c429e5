//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns the bearer token and is passed explicitly to both the
//! navigation guard and the API client. `auth` is the reactive view of it
//! that components render from. `remote` tracks the load status of
//! API-backed page data.

pub mod auth;
pub mod remote;
pub mod session;
