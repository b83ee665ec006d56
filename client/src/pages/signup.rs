//! Registration page (`/auth`).
//!
//! Registration and Google sign-in both land on `/` afterwards; the navbar
//! picks up the new session from the feed.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::context::use_auth;
use crate::auth::error::{AuthAction, AuthError};
use crate::components::form::{CheckboxField, ErrorBanner, FormField};
use crate::state::forms::{Field, FieldErrors, SignupForm};
use crate::util::intent::HOME_PATH;

pub const SIGNUP_SUCCESS_NOTICE: &str = "Registration successful! Welcome to ToyTopia!";

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let agree_to_terms = RwSignal::new(false);
    let errors = RwSignal::new(FieldErrors::default());
    let banner = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);
    let clear_banner = Callback::new(move |()| banner.set(None));

    let finish = move |action: AuthAction, result: Result<(), AuthError>| {
        match result {
            Ok(()) => {
                crate::util::notify::notify(SIGNUP_SUCCESS_NOTICE);
                navigate(HOME_PATH, NavigateOptions::default());
            }
            Err(e) => banner.set(Some(e.message(action))),
        }
        busy.set(false);
    };

    let on_submit = {
        let finish = finish.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            let form = SignupForm {
                first_name: first_name.get_untracked(),
                last_name: last_name.get_untracked(),
                email: email.get_untracked(),
                password: password.get_untracked(),
                confirm_password: confirm_password.get_untracked(),
                agree_to_terms: agree_to_terms.get_untracked(),
            };
            let found = form.validate();
            let valid = found.is_empty();
            errors.set(found);
            if !valid {
                return;
            }
            busy.set(true);
            banner.set(None);
            #[cfg(feature = "hydrate")]
            {
                let finish = finish.clone();
                leptos::task::spawn_local(async move {
                    let result = auth.signup(form.email, form.password, form.first_name, form.last_name).await;
                    finish(AuthAction::Signup, result);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&finish, form, auth);
        }
    };

    let on_google = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        banner.set(None);
        #[cfg(feature = "hydrate")]
        {
            let finish = finish.clone();
            leptos::task::spawn_local(async move {
                finish(AuthAction::Google, auth.sign_in_with_google().await);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&finish, auth);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__header">
                    <h2>"Create Your Account"</h2>
                    <p>"Join ToyTopia and discover amazing toys"</p>
                </div>
                <ErrorBanner message=banner />
                {auth.google_enabled().then(move || view! {
                    <button class="btn btn-outline btn-google" type="button" disabled=move || busy.get() on:click=on_google>
                        "Sign up with Google"
                    </button>
                    <div class="divider">"OR"</div>
                })}
                <form class="auth-form" on:submit=on_submit>
                    <div class="auth-form__row">
                        <FormField
                            label="First Name"
                            field=Field::FirstName
                            placeholder="First name"
                            value=first_name
                            errors=errors
                            on_edit=clear_banner
                        />
                        <FormField
                            label="Last Name"
                            field=Field::LastName
                            placeholder="Last name"
                            value=last_name
                            errors=errors
                            on_edit=clear_banner
                        />
                    </div>
                    <FormField
                        label="Email Address"
                        field=Field::Email
                        input_type="email"
                        placeholder="Enter your email"
                        value=email
                        errors=errors
                        on_edit=clear_banner
                    />
                    <FormField
                        label="Password"
                        field=Field::Password
                        input_type="password"
                        placeholder="Create a password"
                        value=password
                        errors=errors
                        on_edit=clear_banner
                    />
                    <FormField
                        label="Confirm Password"
                        field=Field::ConfirmPassword
                        input_type="password"
                        placeholder="Confirm your password"
                        value=confirm_password
                        errors=errors
                        on_edit=clear_banner
                    />
                    <CheckboxField field=Field::AgreeToTerms checked=agree_to_terms errors=errors on_edit=clear_banner>
                        "I agree to the " <a href="#" class="link link-primary">"Terms and Conditions"</a> " and "
                        <a href="#" class="link link-primary">"Privacy Policy"</a>
                    </CheckboxField>
                    <button class="btn btn-primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating Account..." } else { "Create Account" }}
                    </button>
                </form>
                <div class="divider">"OR"</div>
                <p class="auth-card__switch">
                    "Already have an account? " <a class="link link-primary" href="/login">"Sign in here"</a>
                </p>
                <a class="btn btn-ghost" href="/">"Back to Home"</a>
            </div>
        </div>
    }
}
