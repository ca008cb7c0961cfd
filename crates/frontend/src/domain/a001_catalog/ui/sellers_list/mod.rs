use contracts::domain::a001_catalog::aggregate::Seller;
use contracts::domain::a001_catalog::filter::FilterSelection;
use contracts::shared::query_string::join_path_and_query;
use contracts::system::auth::routing::CATALOG_PATH;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_catalog::api;
use crate::shared::icons::icon;

/// Catalog link showing only this seller's products.
fn catalog_link_for(seller_id: &str) -> String {
    let mut selection = FilterSelection::default();
    selection.toggle_seller(seller_id);
    join_path_and_query(CATALOG_PATH, &selection.to_query())
}

#[component]
#[allow(non_snake_case)]
pub fn SellersList() -> impl IntoView {
    let (sellers, set_sellers) = signal::<Vec<Seller>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        match api::fetch_sellers().await {
            Ok(v) => set_sellers.set(v),
            Err(e) => {
                log::error!("Failed to load sellers: {}", e);
                set_error.set(Some(e.to_string()));
            }
        }
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Artisans"</h1>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <ul class="seller-list">
                <For
                    each=move || sellers.get()
                    key=|seller| seller.id.clone()
                    children=|seller| view! {
                        <li class="seller-list__item">
                            {icon("package")}
                            <a href=catalog_link_for(&seller.id)>{seller.name}</a>
                        </li>
                    }
                />
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_link_filters_by_seller() {
        assert_eq!(catalog_link_for("s-oak-and-ash"), "/catalog?sellers=s-oak-and-ash");
    }
}
