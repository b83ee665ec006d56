//! Login page: email + password, or Google.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached directly or through the route guard. When the guard sent the user
//! here, `?from=` names the page to return to; a successful sign-in replaces
//! the login entry in history with that page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::auth::context::use_auth;
use crate::auth::error::AuthAction;
use crate::components::form::{CheckboxField, ErrorBanner, FormField};
use crate::state::forms::{Field, FieldErrors, LoginForm};
use crate::util::intent::{FROM_PARAM, has_pending_intent, return_target};

pub const LOGIN_SUCCESS_NOTICE: &str = "Login successful! Welcome back to ToyTopia!";

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let query = use_query_map();
    let from = Memo::new(move |_| query.with(|q| q.get(FROM_PARAM)));

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember_me = RwSignal::new(false);
    let errors = RwSignal::new(FieldErrors::default());
    let banner = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);
    let clear_banner = Callback::new(move |()| banner.set(None));

    let finish = move |action: AuthAction, result: Result<(), crate::auth::error::AuthError>| {
        match result {
            Ok(()) => {
                crate::util::notify::notify(LOGIN_SUCCESS_NOTICE);
                let target = return_target(from.get_untracked().as_deref());
                navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
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
            let form = LoginForm {
                email: email.get_untracked(),
                password: password.get_untracked(),
                remember_me: remember_me.get_untracked(),
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
                    finish(AuthAction::Login, auth.login(form.email, form.password).await);
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
                    <h2>"Welcome Back"</h2>
                    <p>"Sign in to your ToyTopia account"</p>
                </div>
                <Show when=move || has_pending_intent(from.get().as_deref())>
                    <div class="alert alert-warning">"Please login to access the requested page"</div>
                </Show>
                <ErrorBanner message=banner />
                {auth.google_enabled().then(move || view! {
                    <button class="btn btn-outline btn-google" type="button" disabled=move || busy.get() on:click=on_google>
                        "Continue with Google"
                    </button>
                    <div class="divider">"OR"</div>
                })}
                <form class="auth-form" on:submit=on_submit>
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
                        placeholder="Enter your password"
                        value=password
                        errors=errors
                        on_edit=clear_banner
                    />
                    <CheckboxField checked=remember_me errors=errors on_edit=clear_banner>
                        "Remember me"
                    </CheckboxField>
                    <button class="btn btn-primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>
                <div class="divider">"OR"</div>
                <p class="auth-card__switch">
                    "Don't have an account? " <a class="link link-primary" href="/auth">"Create one here"</a>
                </p>
                <a class="btn btn-ghost" href="/">"Back to Home"</a>
            </div>
        </div>
    }
}
