//! Authentication: provider adapter, session feed, and the UI-facing context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `firebase` talks to the identity provider, `client` turns provider results
//! into session feed publications, and `context` mirrors the feed into a Leptos
//! signal for route guards and pages.

pub mod client;
pub mod context;
pub mod error;
pub mod feed;
pub mod firebase;
pub mod popup;
pub mod provider;
