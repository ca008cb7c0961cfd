use contracts::system::auth::routing::{HOME_PATH, LOGIN_PATH};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::nav::Nav;
use crate::shared::icons::icon;
use crate::shared::navigator::{Navigator, RouterNavigator};
use crate::system::auth::context::{do_logout, use_auth};

#[component]
pub fn Header() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let navigator = StoredValue::new_local(RouterNavigator::new());

    let logout = move |_| {
        let navigator = navigator.get_value();
        spawn_local(async move {
            do_logout(set_auth_state).await;
            navigator.redirect(HOME_PATH);
        });
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <a class="header__title" href=HOME_PATH>"Artisan Market"</a>
                <Nav />
            </div>
            <div class="header__actions">
                <Show
                    when=move || auth_state.with(|s| s.is_authenticated())
                    fallback=|| view! {
                        <a class="button button--ghost" href=LOGIN_PATH>
                            {icon("user")}
                            "Sign in"
                        </a>
                    }
                >
                    <div class="top-header__user">
                        {icon("user")}
                        <span>
                            {move || auth_state.get().user_info
                                .map(|u| u.username)
                                .unwrap_or_default()}
                        </span>
                    </div>
                </Show>
                <Show when=move || auth_state.with(|s| s.is_authenticated())>
                    <button class="top-header__icon-btn" on:click=logout title="Sign out">
                        {icon("log-out")}
                    </button>
                </Show>
            </div>
        </header>
    }
}
