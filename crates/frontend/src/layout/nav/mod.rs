//! Storefront navigation bar with the cart badge and the mobile menu.

use contracts::shared::navigation::{cart_badge, menu_open_after_resize, NavLink, NAV_LINKS};
use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::domain::a002_cart::context::use_cart;
use crate::shared::icons::icon;

#[component]
#[allow(non_snake_case)]
pub fn Nav() -> impl IntoView {
    let is_open = RwSignal::new(false);

    let resize = window_event_listener(ev::resize, move |_| {
        let width = window()
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or_default();
        let open = is_open.get_untracked();
        let next = menu_open_after_resize(open, width);
        if next != open {
            is_open.set(next);
        }
    });
    on_cleanup(move || resize.remove());

    view! {
        <nav class="nav">
            <ul class="nav__list nav__list--desktop">
                <NavLinks on_follow=Callback::new(|_| ()) />
            </ul>

            <button
                class="nav__toggle top-header__icon-btn"
                title=move || if is_open.get() { "Close menu" } else { "Open menu" }
                on:click=move |_| is_open.update(|open| *open = !*open)
            >
                {move || if is_open.get() { icon("x") } else { icon("menu") }}
            </button>

            <Show when=move || is_open.get()>
                <ul class="nav__list nav__list--mobile">
                    <NavLinks on_follow=Callback::new(move |_| is_open.set(false)) />
                </ul>
            </Show>
        </nav>
    }
}

#[component]
#[allow(non_snake_case)]
fn NavLinks(on_follow: Callback<()>) -> impl IntoView {
    let pathname = use_location().pathname;
    let cart = use_cart();

    NAV_LINKS
        .into_iter()
        .map(|link: NavLink| {
            let is_active = move || pathname.with(|path| link.is_active(path));
            view! {
                <li class="nav__item">
                    <a
                        class=move || if is_active() { "nav__link nav__link--active" } else { "nav__link" }
                        href=link.href
                        aria-current=move || is_active().then_some("page")
                        on:click=move |_| on_follow.run(())
                    >
                        {icon(link.icon)}
                        <span>{link.label}</span>
                        {link.is_cart.then(|| {
                            move || {
                                cart_badge(cart.count.get())
                                    .map(|badge| view! { <span class="nav__badge">{badge}</span> })
                            }
                        })}
                    </a>
                </li>
            }
        })
        .collect_view()
}
