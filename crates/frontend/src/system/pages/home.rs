use contracts::system::auth::routing::{CATALOG_PATH, SELLERS_PATH};
use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[component]
pub fn HomePage() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let greeting = move || {
        auth_state.with(|state| match &state.user_info {
            Some(user) => format!(
                "Welcome back, {}",
                user.full_name.clone().unwrap_or_else(|| user.username.clone())
            ),
            None => "Handmade goods from independent makers".to_string(),
        })
    };

    view! {
        <div class="page home-page">
            <section class="hero">
                <h1 class="hero__title">"Artisan Market"</h1>
                <p class="hero__subtitle">{greeting}</p>
                <div class="hero__actions">
                    <a class="button button--primary" href=CATALOG_PATH>
                        {icon("book-image")}
                        "Browse the catalog"
                    </a>
                    <a class="button button--secondary" href=SELLERS_PATH>
                        {icon("package")}
                        "Meet the artisans"
                    </a>
                </div>
            </section>
        </div>
    }
}
