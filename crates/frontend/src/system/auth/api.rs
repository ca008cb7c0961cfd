use contracts::system::auth::{
    AuthError, LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};

use crate::shared::api_utils::{get_json, post_json, read_json, send_post, ApiError};

/// Login with username and password
///
/// A rejected sign-in comes back as `ApiError::Auth`; transport and decode
/// failures keep their own variants.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    let response = send_post("/api/system/auth/login", request, None).await?;

    if !response.ok() {
        let status = response.status();
        log::warn!("Login rejected with status {}", status);
        return Err(AuthError::from_login_status(status).into());
    }

    read_json(response).await
}

/// Refresh access token using refresh token
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, ApiError> {
    post_json(
        "/api/system/auth/refresh",
        &RefreshRequest { refresh_token },
        None,
    )
    .await
}

/// Logout (revoke refresh token)
pub async fn logout(refresh_token: String) -> Result<(), ApiError> {
    let response = send_post(
        "/api/system/auth/logout",
        &RefreshRequest { refresh_token },
        None,
    )
    .await?;

    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }
    Ok(())
}

/// Get current user info
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, ApiError> {
    get_json("/api/system/auth/me", Some(access_token)).await
}
