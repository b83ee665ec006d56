//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `catalog` fetches the static toy catalog and `types` defines the shared
//! wire schema. Identity provider calls live under `auth`.

pub mod catalog;
pub mod types;
