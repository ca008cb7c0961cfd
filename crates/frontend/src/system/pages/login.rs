use contracts::system::auth::routing::REDIRECT_TO_KEY;
use contracts::system::auth::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;

use crate::shared::navigator::RouterNavigator;
use crate::system::auth::context::{establish_session, use_auth};
use crate::system::auth::flow::{authenticate, AuthOutcome};
use crate::system::auth::api;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (unexpected_error, set_unexpected_error) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();
    let query = use_query_map();
    let navigator = RouterNavigator::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let request = LoginRequest {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        let redirect_to = query.with_untracked(|q| q.get(REDIRECT_TO_KEY));
        let navigator = navigator.clone();

        set_is_loading.set(true);
        set_error_message.set(None);
        set_unexpected_error.set(None);

        spawn_local(async move {
            let outcome = authenticate(
                api::login(&request),
                &navigator,
                redirect_to.as_deref(),
                |response| establish_session(set_auth_state, response),
            )
            .await;

            match outcome {
                Ok(AuthOutcome::Redirected(_)) => {}
                Ok(AuthOutcome::Rejected(error)) => set_error_message.set(Some(error.to_string())),
                Err(error) => set_unexpected_error.set(Some(error.user_message())),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Artisan Market"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <Show when=move || unexpected_error.get().is_some()>
                    <div class="warning-box">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">
                            {move || unexpected_error.get().unwrap_or_default()}
                        </span>
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            autocomplete="username"
                            value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
