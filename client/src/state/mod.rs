//! Client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure data and decision functions shared by pages and components. Nothing in
//! here touches the browser, so every rule is covered by native unit tests.

pub mod catalog;
pub mod forms;
pub mod session;
