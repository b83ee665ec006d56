//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shop chrome, the route guard, and catalog loading
//! conventions while reading shared state from Leptos context providers.

pub mod catalog;
pub mod form;
pub mod guard;
pub mod layout;
pub mod navbar;
pub mod side_links;
pub mod toy_card;
