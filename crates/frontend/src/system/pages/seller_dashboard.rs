use leptos::prelude::*;

use crate::system::auth::context::use_auth;

#[component]
pub fn SellerDashboardPage() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let seller_name = move || {
        auth_state
            .get()
            .user_info
            .map(|u| u.full_name.unwrap_or(u.username))
            .unwrap_or_default()
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Seller dashboard"</h1>
                </div>
            </div>
            <p>{move || format!("Hello, {}. Your storefront is live.", seller_name())}</p>
        </div>
    }
}
