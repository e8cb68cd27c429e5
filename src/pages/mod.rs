//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped data loading and delegates rendering details
//! to `components`. Pages never check the token themselves; the navigation
//! guard does that before they mount.

pub mod about;
pub mod auth;
pub mod detail;
pub mod discover;
pub mod genres;
pub mod home;
pub mod not_found;
