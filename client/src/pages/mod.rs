//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod about;
pub mod home;
pub mod login;
pub mod more;
pub mod not_found;
pub mod popular_toys;
pub mod popup_callback;
pub mod profile;
pub mod signup;
pub mod toy_detail;
