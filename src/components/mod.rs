//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and title listings while reading shared
//! state from Leptos context providers.

pub mod site_header;
pub mod title_card;
