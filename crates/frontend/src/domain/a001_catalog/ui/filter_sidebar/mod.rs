pub mod controller;

use contracts::domain::a001_catalog::aggregate::{Category, Seller};
use contracts::domain::a001_catalog::filter::{FilterSelection, PriceRange};
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use thaw::{Button, ButtonAppearance};

use crate::shared::icons::icon;
use crate::shared::navigator::RouterNavigator;
use controller::FilterController;

/// Category, artisan and price filters for the catalog.
///
/// Checkbox and radio state is read back from the URL; clicks only request
/// a new URL.
#[component]
#[allow(non_snake_case)]
pub fn FilterSidebar(
    categories: ReadSignal<Vec<Category>>,
    sellers: ReadSignal<Vec<Seller>>,
) -> impl IntoView {
    let location = use_location();
    let controller = StoredValue::new_local(FilterController::new(
        RouterNavigator::new(),
        location.pathname.get_untracked(),
        location.search.get_untracked(),
    ));
    let search = location.search;
    let selection = Memo::new(move |_| search.with(|s| FilterSelection::from_query(s)));
    let mobile_open = RwSignal::new(false);

    Effect::new(move |_| {
        let pathname = location.pathname.get();
        let search = location.search.get();
        controller.update_value(|c| c.on_external_change(&pathname, &search));
    });

    let on_category =
        Callback::new(move |id: String| controller.with_value(|c| c.toggle_category(&id)));
    let on_seller =
        Callback::new(move |id: String| controller.with_value(|c| c.toggle_seller(&id)));
    let on_price = Callback::new(move |price: Option<PriceRange>| {
        controller.with_value(|c| c.set_price(price))
    });
    let on_clear = Callback::new(move |_: ()| controller.with_value(|c| c.clear()));

    view! {
        <aside class="filter-sidebar filter-sidebar--desktop">
            <FilterSections
                radio_group="price-desktop"
                selection=selection
                categories=categories
                sellers=sellers
                on_category=on_category
                on_seller=on_seller
                on_price=on_price
                on_clear=on_clear
            />
        </aside>

        <button
            class="filter-sidebar__mobile-toggle button button--secondary"
            on:click=move |_| mobile_open.set(true)
        >
            {icon("filter")}
            "Filters"
        </button>

        <Show when=move || mobile_open.get()>
            <div class="filter-overlay" on:click=move |_| mobile_open.set(false)></div>
            <aside class="filter-sidebar filter-sidebar--mobile">
                <div class="filter-sidebar__mobile-header">
                    <h2>"Filters"</h2>
                    <button
                        class="top-header__icon-btn"
                        title="Close filters"
                        on:click=move |_| mobile_open.set(false)
                    >
                        {icon("x")}
                    </button>
                </div>
                <FilterSections
                    radio_group="price-mobile"
                    selection=selection
                    categories=categories
                    sellers=sellers
                    on_category=on_category
                    on_seller=on_seller
                    on_price=on_price
                    on_clear=on_clear
                />
            </aside>
        </Show>
    }
}

#[component]
#[allow(non_snake_case)]
fn FilterSections(
    radio_group: &'static str,
    selection: Memo<FilterSelection>,
    categories: ReadSignal<Vec<Category>>,
    sellers: ReadSignal<Vec<Seller>>,
    on_category: Callback<String>,
    on_seller: Callback<String>,
    on_price: Callback<Option<PriceRange>>,
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-sections">
            <section class="filter-section">
                <h3 class="filter-section__title">"Categories"</h3>
                <For
                    each=move || categories.get()
                    key=|category| category.category_id.clone()
                    children=move |category| {
                        let id = category.category_id.clone();
                        let checked_id = id.clone();
                        view! {
                            <label class="filter-option">
                                <input
                                    type="checkbox"
                                    prop:checked=move || selection.with(|s| s.categories.contains(&checked_id))
                                    on:change=move |_| on_category.run(id.clone())
                                />
                                <span>{category.category_name}</span>
                            </label>
                        }
                    }
                />
            </section>

            <section class="filter-section">
                <h3 class="filter-section__title">"Artisans"</h3>
                <For
                    each=move || sellers.get()
                    key=|seller| seller.id.clone()
                    children=move |seller| {
                        let id = seller.id.clone();
                        let checked_id = id.clone();
                        view! {
                            <label class="filter-option">
                                <input
                                    type="checkbox"
                                    prop:checked=move || selection.with(|s| s.sellers.contains(&checked_id))
                                    on:change=move |_| on_seller.run(id.clone())
                                />
                                <span>{seller.name}</span>
                            </label>
                        }
                    }
                />
            </section>

            <section class="filter-section">
                <h3 class="filter-section__title">"Price"</h3>
                <label class="filter-option">
                    <input
                        type="radio"
                        name=radio_group
                        prop:checked=move || selection.with(|s| s.price.is_none())
                        on:change=move |_| on_price.run(None)
                    />
                    <span>"Any price"</span>
                </label>
                {PriceRange::ALL
                    .into_iter()
                    .map(|range| {
                        view! {
                            <label class="filter-option">
                                <input
                                    type="radio"
                                    name=radio_group
                                    value=range.as_query_value()
                                    prop:checked=move || selection.with(|s| s.price == Some(range))
                                    on:change=move |_| on_price.run(Some(range))
                                />
                                <span>{range.label()}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </section>

            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| on_clear.run(())
            >
                {icon("brush-cleaning")}
                "Clear All Filters"
            </Button>
        </div>
    }
}
