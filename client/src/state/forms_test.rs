use super::*;

fn valid_signup() -> SignupForm {
    SignupForm {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "secret1".to_owned(),
        confirm_password: "secret1".to_owned(),
        agree_to_terms: true,
    }
}

fn only(field: Field, message: &'static str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.set(field, message);
    errors
}

// =============================================================
// Email shape
// =============================================================

#[test]
fn email_shape_requires_at_and_domain_dot() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last@mail.example.org"));
    assert!(!is_valid_email("no-at-sign.example.com"));
    assert!(!is_valid_email("user@localhost"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("user@.com"));
}

// =============================================================
// FieldErrors
// =============================================================

#[test]
fn clearing_one_field_keeps_others() {
    let mut errors = LoginForm::default().validate();
    errors.clear(Field::Email);
    assert_eq!(errors.get(Field::Email), None);
    assert_eq!(errors.get(Field::Password), Some("Password is required"));
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_requires_email_and_password() {
    let errors = LoginForm::default().validate();
    assert_eq!(errors.get(Field::Email), Some("Email is required"));
    assert_eq!(errors.get(Field::Password), Some("Password is required"));
}

#[test]
fn login_rejects_malformed_email() {
    let form = LoginForm { email: "ada".to_owned(), password: "x".to_owned(), remember_me: false };
    let errors = form.validate();
    assert_eq!(errors, only(Field::Email, "Email is invalid"));
}

#[test]
fn login_accepts_complete_form() {
    let form = LoginForm { email: "ada@example.com".to_owned(), password: "x".to_owned(), remember_me: true };
    assert!(form.validate().is_empty());
}

// =============================================================
// Signup
// =============================================================

#[test]
fn signup_valid_form_has_no_errors() {
    assert!(valid_signup().validate().is_empty());
}

#[test]
fn signup_whitespace_names_are_missing() {
    let form = SignupForm { first_name: "  ".to_owned(), last_name: String::new(), ..valid_signup() };
    let errors = form.validate();
    assert_eq!(errors.get(Field::FirstName), Some("First name is required"));
    assert_eq!(errors.get(Field::LastName), Some("Last name is required"));
}

#[test]
fn signup_short_password_rejected() {
    let form = SignupForm { password: "abc".to_owned(), confirm_password: "abc".to_owned(), ..valid_signup() };
    assert_eq!(form.validate().get(Field::Password), Some("Password must be at least 6 characters"));
}

#[test]
fn signup_mismatched_confirmation_rejected() {
    let form = SignupForm { confirm_password: "different".to_owned(), ..valid_signup() };
    let errors = form.validate();
    assert_eq!(errors, only(Field::ConfirmPassword, "Passwords do not match"));
}

#[test]
fn signup_requires_terms() {
    let form = SignupForm { agree_to_terms: false, ..valid_signup() };
    assert_eq!(
        form.validate().get(Field::AgreeToTerms),
        Some("You must agree to the terms and conditions")
    );
}

#[test]
fn display_name_joins_trimmed_names() {
    assert_eq!(display_name(" Ada ", "Lovelace "), "Ada Lovelace");
}

// =============================================================
// Try-now and contact
// =============================================================

#[test]
fn try_now_requires_name_and_valid_email() {
    let errors = TryNowForm { name: String::new(), email: "bad".to_owned() }.validate();
    assert_eq!(errors.get(Field::Name), Some("Name is required"));
    assert_eq!(errors.get(Field::Email), Some("Email is invalid"));
    assert!(TryNowForm { name: "Ada".to_owned(), email: "a@b.io".to_owned() }.validate().is_empty());
}

#[test]
fn contact_requires_every_field() {
    let errors = ContactForm::default().validate();
    assert_eq!(errors.get(Field::Name), Some("Name is required"));
    assert_eq!(errors.get(Field::Email), Some("Email is required"));
    assert_eq!(errors.get(Field::Subject), Some("Subject is required"));
    assert_eq!(errors.get(Field::Message), Some("Message is required"));
}

#[test]
fn contact_complete_form_passes() {
    let form = ContactForm {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: "Order".to_owned(),
        message: "Where is my kite?".to_owned(),
    };
    assert!(form.validate().is_empty());
}
