use axum::{extract::Json, http::StatusCode};
use chrono::Utc;
use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};

use crate::system::auth::extractor::CurrentUser;
use crate::system::auth::{jwt, refresh_store};
use crate::system::users::service::{self as user_service, CredentialsError};

/// Login handler
///
/// 401 for unknown user or wrong password, 403 for a disabled account.
pub async fn login(Json(request): Json<LoginRequest>) -> Result<Json<LoginResponse>, StatusCode> {
    let user = user_service::verify_credentials(&request.username, &request.password)
        .await
        .map_err(|e| match e {
            CredentialsError::Invalid => {
                tracing::info!("Failed login for '{}'", request.username);
                StatusCode::UNAUTHORIZED
            }
            CredentialsError::Inactive => {
                tracing::warn!("Login attempt for inactive account '{}'", request.username);
                StatusCode::FORBIDDEN
            }
            CredentialsError::Internal(e) => {
                tracing::error!("Login failed: {:#}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        })?;

    let access_token = jwt::generate_access_token(&user.id, &user.username, user.role)
        .map_err(internal_error)?;

    let refresh_token = jwt::generate_refresh_token();
    let now = Utc::now();
    let expires_at = jwt::refresh_token_expiration(now).map_err(internal_error)?;
    refresh_store::store(&user.id, &refresh_token, expires_at).map_err(internal_error)?;

    tracing::info!("User '{}' signed in as {}", user.username, user.role);

    Ok(Json(LoginResponse {
        access_token,
        refresh_token,
        user: user.into(),
    }))
}

/// Refresh token handler
pub async fn refresh(
    Json(request): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, StatusCode> {
    let user_id = refresh_store::validate(&request.refresh_token, Utc::now())
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    let user = user_service::get_by_id(&user_id)
        .await
        .map_err(internal_error)?
        .filter(|u| u.is_active)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let access_token = jwt::generate_access_token(&user.id, &user.username, user.role)
        .map_err(internal_error)?;

    Ok(Json(RefreshResponse { access_token }))
}

/// Logout handler
pub async fn logout(Json(request): Json<RefreshRequest>) -> Result<StatusCode, StatusCode> {
    refresh_store::revoke(&request.refresh_token, Utc::now()).map_err(internal_error)?;
    Ok(StatusCode::OK)
}

/// Get current user handler (protected by middleware)
pub async fn current_user(
    CurrentUser(claims): CurrentUser,
) -> Result<Json<UserInfo>, StatusCode> {
    let user = user_service::get_by_id(&claims.sub)
        .await
        .map_err(internal_error)?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(user.into()))
}

fn internal_error(e: anyhow::Error) -> StatusCode {
    tracing::error!("Auth handler error: {:#}", e);
    StatusCode::INTERNAL_SERVER_ERROR
}
