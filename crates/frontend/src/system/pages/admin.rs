use leptos::prelude::*;

use crate::system::auth::context::use_auth;

#[component]
pub fn AdminPage() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let username = move || {
        auth_state
            .get()
            .user_info
            .map(|u| u.username)
            .unwrap_or_default()
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Administration"</h1>
                </div>
            </div>
            <p>"Signed in as " <strong>{username}</strong></p>
        </div>
    }
}
