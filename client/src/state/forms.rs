//! Form models and their synchronous field validation.
//!
//! Every form validates into a `FieldErrors` map keyed by `Field`. Pages show
//! each message next to its input and clear a single entry as soon as that
//! input is edited again.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").ok());

/// Loose email shape check: something, `@`, something, `.`, something.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
    AgreeToTerms,
    Subject,
    Message,
}

/// Per-field validation messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn set(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }

    /// Drop the message for one field; other fields keep theirs.
    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn require(errors: &mut FieldErrors, field: Field, value: &str, message: &'static str) {
    if value.trim().is_empty() {
        errors.set(field, message);
    }
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if email.trim().is_empty() {
        errors.set(Field::Email, "Email is required");
    } else if !is_valid_email(email) {
        errors.set(Field::Email, "Email is invalid");
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        check_email(&mut errors, &self.email);
        if self.password.is_empty() {
            errors.set(Field::Password, "Password is required");
        }
        errors
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_to_terms: bool,
}

impl SignupForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        require(&mut errors, Field::FirstName, &self.first_name, "First name is required");
        require(&mut errors, Field::LastName, &self.last_name, "Last name is required");
        check_email(&mut errors, &self.email);
        if self.password.is_empty() {
            errors.set(Field::Password, "Password is required");
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.set(Field::Password, "Password must be at least 6 characters");
        }
        if self.password != self.confirm_password {
            errors.set(Field::ConfirmPassword, "Passwords do not match");
        }
        if !self.agree_to_terms {
            errors.set(Field::AgreeToTerms, "You must agree to the terms and conditions");
        }
        errors
    }
}

/// Display name registered with the provider for a new account.
pub fn display_name(first_name: &str, last_name: &str) -> String {
    format!("{} {}", first_name.trim(), last_name.trim())
}

/// Request-a-demo form on the toy detail page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TryNowForm {
    pub name: String,
    pub email: String,
}

impl TryNowForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        require(&mut errors, Field::Name, &self.name, "Name is required");
        check_email(&mut errors, &self.email);
        errors
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        require(&mut errors, Field::Name, &self.name, "Name is required");
        check_email(&mut errors, &self.email);
        require(&mut errors, Field::Subject, &self.subject, "Subject is required");
        require(&mut errors, Field::Message, &self.message, "Message is required");
        errors
    }
}
