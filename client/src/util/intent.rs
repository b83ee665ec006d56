//! Navigation intent carried through the login route.
//!
//! SYSTEM CONTEXT
//! ==============
//! When the guard bounces an anonymous visitor, the originally requested path
//! travels as `/login?from=<path>`. The login page reads it back once and
//! replaces its own history entry with the target after a successful sign-in.

#[cfg(test)]
#[path = "intent_test.rs"]
mod intent_test;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";
/// Query parameter holding the return target.
pub const FROM_PARAM: &str = "from";

/// Login URL that remembers `requested` as the return target.
pub fn login_redirect(requested: &str) -> String {
    format!("{LOGIN_PATH}?{FROM_PARAM}={}", urlencoding::encode(requested))
}

/// Where to go after a successful login.
///
/// Only same-origin absolute paths are honoured; anything else (missing,
/// protocol-relative, or a full URL) falls back to the home page.
pub fn return_target(from: Option<&str>) -> String {
    match from.map(str::trim) {
        Some(path) if is_local_path(path) => path.to_owned(),
        _ => HOME_PATH.to_owned(),
    }
}

/// True when the login page was reached through the guard with a real target.
pub fn has_pending_intent(from: Option<&str>) -> bool {
    return_target(from) != HOME_PATH
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') && path != LOGIN_PATH
}
