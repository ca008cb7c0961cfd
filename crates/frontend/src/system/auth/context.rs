use contracts::system::auth::{LoginResponse, Role, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    /// A stored session is still being validated.
    pub restoring: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user_info.as_ref().map(|u| u.role)
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let stored_token = storage::get_access_token();
    let (auth_state, set_auth_state) = signal(AuthState {
        restoring: stored_token.is_some(),
        ..Default::default()
    });

    // Try to restore session from localStorage on mount
    Effect::new(move |_| {
        let Some(access_token) = stored_token.clone() else {
            return;
        };
        spawn_local(async move {
            let restored = restore_session(access_token).await;
            if restored.is_none() {
                storage::clear_tokens();
            }
            set_auth_state.set(restored.unwrap_or_default());
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

async fn restore_session(access_token: String) -> Option<AuthState> {
    match api::get_current_user(&access_token).await {
        Ok(user_info) => {
            return Some(AuthState {
                access_token: Some(access_token),
                user_info: Some(user_info),
                restoring: false,
            })
        }
        Err(e) => log::info!("Stored access token rejected: {}", e),
    }

    let refresh_token = storage::get_refresh_token()?;
    let response = match api::refresh_token(refresh_token).await {
        Ok(response) => response,
        Err(e) => {
            log::info!("Session refresh failed: {}", e);
            return None;
        }
    };
    storage::save_access_token(&response.access_token);

    let user_info = api::get_current_user(&response.access_token).await.ok()?;
    Some(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(user_info),
        restoring: false,
    })
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Persist the tokens of a successful sign-in and publish the new session.
pub fn establish_session(set_auth_state: WriteSignal<AuthState>, response: LoginResponse) {
    storage::save_tokens(&response.access_token, &response.refresh_token);
    log::info!(
        "Signed in as {} ({})",
        response.user.username,
        response.user.role
    );
    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(response.user),
        restoring: false,
    });
}

/// Revoke the refresh token, forget the stored tokens and reset the session.
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Some(refresh_token) = storage::get_refresh_token() {
        if let Err(e) = api::logout(refresh_token).await {
            log::warn!("Logout request failed: {}", e);
        }
    }

    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}
