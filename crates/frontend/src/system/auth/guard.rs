use contracts::shared::query_string::join_path_and_query;
use contracts::system::auth::routing::login_url_returning_to;
use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::context::use_auth;
use crate::shared::navigator::{Navigator, RouterNavigator};

/// Renders `children` only for a signed-in user with `role`.
///
/// Anonymous visitors are sent to the login page, which returns them here
/// after sign-in. Signed-in users with another role get an access-denied
/// message.
#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let location = use_location();
    let navigator = RouterNavigator::new();

    Effect::new(move |_| {
        let state = auth_state.get();
        if state.restoring || state.is_authenticated() {
            return;
        }
        let here = join_path_and_query(
            &location.pathname.get_untracked(),
            &location.search.get_untracked(),
        );
        navigator.replace(&login_url_returning_to(&here));
    });

    let allowed = move || auth_state.with(|state| state.role() == Some(role));
    let denied = move || {
        auth_state.with(|state| {
            state.is_authenticated() && state.role().is_some_and(|r| r != role)
        })
    };

    view! {
        <Show
            when=allowed
            fallback=move || view! {
                <Show when=denied>
                    <div class="access-denied">
                        <h2>"Access denied"</h2>
                        <p>{format!("This page requires the {} role.", role)}</p>
                    </div>
                </Show>
            }
        >
            {children()}
        </Show>
    }
}
