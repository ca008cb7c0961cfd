use contracts::domain::a001_catalog::aggregate::{Category, Product, Seller};
use contracts::shared::query_string::join_path_and_query;
use contracts::system::auth::routing::login_url_returning_to;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_location;

use crate::domain::a001_catalog::api;
use crate::domain::a001_catalog::ui::filter_sidebar::FilterSidebar;
use crate::domain::a002_cart;
use crate::domain::a002_cart::context::use_cart;
use crate::shared::navigator::{Navigator, RouterNavigator};
use crate::shared::request_generation::RequestGeneration;
use crate::system::auth::context::use_auth;

#[component]
#[allow(non_snake_case)]
pub fn CatalogPage() -> impl IntoView {
    let location = use_location();
    let (categories, set_categories) = signal::<Vec<Category>>(Vec::new());
    let (sellers, set_sellers) = signal::<Vec<Seller>>(Vec::new());
    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let generation = StoredValue::new(RequestGeneration::default());

    spawn_local(async move {
        match api::fetch_categories().await {
            Ok(v) => set_categories.set(v),
            Err(e) => log::error!("Failed to load categories: {}", e),
        }
        match api::fetch_sellers().await {
            Ok(v) => set_sellers.set(v),
            Err(e) => log::error!("Failed to load sellers: {}", e),
        }
    });

    Effect::new(move |_| {
        let search = location.search.get();
        let current = generation.try_update_value(|g| g.begin()).unwrap_or_default();
        set_loading.set(true);

        spawn_local(async move {
            let result = api::fetch_products(&search).await;
            if !generation.with_value(|g| g.is_current(current)) {
                return;
            }
            match result {
                Ok(v) => {
                    set_products.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load products: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let seller_name = move |seller_id: &str| {
        sellers.with(|all| {
            all.iter()
                .find(|s| s.id == seller_id)
                .map(|s| s.name.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="page catalog-page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Catalog"</h1>
                </div>
                <div class="header__actions">
                    {move || {
                        let n = products.with(|p| p.len());
                        format!("{} {}", n, if n == 1 { "product" } else { "products" })
                    }}
                </div>
            </div>

            <div class="catalog-layout">
                <FilterSidebar categories=categories sellers=sellers />

                <div class="catalog-results">
                    {move || error.get().map(|e| view! {
                        <div class="warning-box">
                            <span class="warning-box__icon">"⚠"</span>
                            <span class="warning-box__text">{e}</span>
                        </div>
                    })}

                    <Show when=move || loading.get()>
                        <div class="loading">"Loading products..."</div>
                    </Show>

                    <Show when=move || !loading.get() && products.with(|p| p.is_empty())>
                        <p class="catalog-results__empty">"No products match these filters."</p>
                    </Show>

                    <div class="product-grid">
                        <For
                            each=move || products.get()
                            key=|product| product.id.clone()
                            children=move |product| {
                                let seller = seller_name(&product.seller_id);
                                view! { <ProductCard product=product seller_name=seller /> }
                            }
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn ProductCard(product: Product, seller_name: String) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let cart = use_cart();
    let location = use_location();
    let navigator = RouterNavigator::new();
    let (adding, set_adding) = signal(false);

    let product_id = product.id.clone();
    let add_to_cart = move |_| {
        let Some(access_token) = auth_state.with_untracked(|s| s.access_token.clone()) else {
            let here = join_path_and_query(
                &location.pathname.get_untracked(),
                &location.search.get_untracked(),
            );
            navigator.redirect(&login_url_returning_to(&here));
            return;
        };
        let product_id = product_id.clone();
        set_adding.set(true);
        spawn_local(async move {
            match a002_cart::api::add_item(&access_token, product_id.clone()).await {
                Ok(count) => {
                    log::debug!("Added {} to cart, {} items", product_id, count.count);
                    cart.set_count(count.count);
                }
                Err(e) => log::error!("Failed to add {} to cart: {}", product_id, e),
            }
            set_adding.set(false);
        });
    };

    view! {
        <div class="product-card">
            {product.image_url.clone().map(|src| view! {
                <img class="product-card__image" src=src alt=product.name.clone() />
            })}
            <div class="product-card__body">
                <h3 class="product-card__title">{product.name.clone()}</h3>
                <p class="product-card__seller">{seller_name}</p>
                <p class="product-card__description">{product.description.clone()}</p>
                <div class="product-card__footer">
                    <span class="product-card__price">{product.display_price()}</span>
                    <button
                        class="button button--primary"
                        disabled=move || adding.get()
                        on:click=add_to_cart
                    >
                        "Add to cart"
                    </button>
                </div>
            </div>
        </div>
    }
}
