use contracts::system::auth::routing::{login_url_returning_to, CART_PATH, CATALOG_PATH};
use leptos::prelude::*;

use crate::domain::a002_cart::context::use_cart;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[component]
#[allow(non_snake_case)]
pub fn CartPage() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let cart = use_cart();
    let signed_in = move || auth_state.with(|s| s.is_authenticated());

    view! {
        <div class="page cart-page">
            <div class="header">
                <div class="header__content">
                    {icon("shopping-cart")}
                    <h1 class="header__title">"Your cart"</h1>
                </div>
            </div>

            <Show
                when=signed_in
                fallback=|| view! {
                    <p>
                        <a href=login_url_returning_to(CART_PATH)>"Sign in"</a>
                        " to see your cart."
                    </p>
                }
            >
                {move || match cart.count.get() {
                    0 => view! {
                        <p>
                            "Your cart is empty. "
                            <a href=CATALOG_PATH>"Browse the catalog"</a>
                        </p>
                    }.into_any(),
                    1 => view! { <p>"You have 1 item in your cart."</p> }.into_any(),
                    n => view! { <p>{format!("You have {} items in your cart.", n)}</p> }.into_any(),
                }}
            </Show>
        </div>
    }
}
