use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::request_generation::RequestGeneration;
use crate::system::auth::context::use_auth;

/// Item count of the signed-in user's cart, shared by the nav badge and
/// the pages that change the cart.
#[derive(Clone, Copy)]
pub struct CartContext {
    pub count: RwSignal<u32>,
}

impl CartContext {
    pub fn set_count(&self, count: u32) {
        self.count.set(count);
    }
}

/// Provides `CartContext` and reloads the count whenever the session changes.
///
/// Must be placed inside `AuthProvider`.
#[component]
pub fn CartProvider(children: Children) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let cart = CartContext {
        count: RwSignal::new(0),
    };

    let generation = StoredValue::new(RequestGeneration::default());

    Effect::new(move |_| {
        let access_token = auth_state.with(|s| s.access_token.clone());
        let current = generation.try_update_value(|g| g.begin()).unwrap_or_default();
        let Some(access_token) = access_token else {
            cart.set_count(0);
            return;
        };
        spawn_local(async move {
            let result = api::fetch_count(&access_token).await;
            if !generation.with_value(|g| g.is_current(current)) {
                return;
            }
            match result {
                Ok(count) => cart.set_count(count.count),
                Err(e) => log::warn!("Failed to load cart count: {}", e),
            }
        });
    });

    provide_context(cart);

    children()
}

pub fn use_cart() -> CartContext {
    use_context::<CartContext>().expect("CartProvider not found in component tree")
}
