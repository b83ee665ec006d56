//! Signed-in user's profile (`/my-profile`, guarded).

use leptos::prelude::*;

use crate::auth::context::use_auth;
use crate::net::types::User;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    move || match auth.user() {
        Some(user) => view! { <ProfileCard user /> }.into_any(),
        None => view! {
            <div class="profile profile--anonymous">
                <h1>"Please log in to view your profile"</h1>
                <a class="btn btn-primary" href="/login">"Login"</a>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn ProfileCard(user: User) -> impl IntoView {
    let member_since = user.member_since().unwrap_or_else(|| "Unknown".to_owned());
    view! {
        <div class="profile">
            <div class="profile__header">
                <span class="avatar avatar--large">{user.initial().to_string()}</span>
                <div>
                    <h1>{user.name_or_default().to_owned()}</h1>
                    <p>{user.email.clone().unwrap_or_default()}</p>
                </div>
            </div>
            <div class="profile__body">
                <section>
                    <h2>"Account Information"</h2>
                    <p><span class="label-strong">"Email:"</span>" "{user.email.clone().unwrap_or_default()}</p>
                    <p><span class="label-strong">"User ID:"</span>" "<span class="profile__uid">{user.uid.clone()}</span></p>
                    <p><span class="label-strong">"Member since:"</span>" "{member_since}</p>
                </section>
                <section>
                    <h2>"Quick Actions"</h2>
                    <a class="btn btn-outline" href="/">"Browse Toys"</a>
                    <a class="btn btn-outline" href="/popular-toys">"Popular Toys"</a>
                </section>
            </div>
            <a class="btn btn-primary" href="/">"Back to Home"</a>
        </div>
    }
}
