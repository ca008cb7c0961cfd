//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use contracts::system::auth::AuthError;
use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};

/// Failure of a backend call.
///
/// Only `Auth` is something a form can recover from; everything else is
/// unexpected from the page's point of view.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("HTTP {0}")]
    Http(u16),
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text to show a shopper for this failure.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Auth(error) => error.to_string(),
            ApiError::Transport(_) => {
                "We could not reach the server. Please try again in a moment.".to_string()
            }
            ApiError::Http(status) => format!(
                "The server could not handle the request (HTTP {}). Please try again.",
                status
            ),
            ApiError::Decode(_) => {
                "The server sent a response we did not understand. Please try again.".to_string()
            }
        }
    }
}

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET a JSON resource, optionally with a bearer token
pub async fn get_json<T: DeserializeOwned>(path: &str, access_token: Option<&str>) -> Result<T, ApiError> {
    let mut request = Request::get(&api_url(path)).header("Accept", "application/json");
    if let Some(token) = access_token {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    read_json(response).await
}

/// POST a JSON body and read a JSON response
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    access_token: Option<&str>,
) -> Result<T, ApiError> {
    let response = send_post(path, body, access_token).await?;
    read_json(response).await
}

/// POST a JSON body and hand back the raw response, whatever its status
pub async fn send_post<B: Serialize>(
    path: &str,
    body: &B,
    access_token: Option<&str>,
) -> Result<Response, ApiError> {
    let mut builder = Request::post(&api_url(path));
    if let Some(token) = access_token {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }

    builder
        .json(body)
        .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))
}

pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
