pub mod routing;

use serde::{Deserialize, Serialize};

/// Role of the signed-in principal.
///
/// Role strings the client does not recognize deserialize as `Customer`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Seller,
    #[default]
    #[serde(other)]
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Seller => "Seller",
            Role::Customer => "Customer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String, // user_id
    pub username: String,
    pub role: Role,
    pub exp: usize, // expiration timestamp
    pub iat: usize, // issued at
}

/// Sign-in failure reported by the authentication server.
///
/// `Display` is the message shown on the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid Username or Password")]
    InvalidCredentials,
    #[error("Oops! Something went wrong.")]
    Unknown,
}

impl AuthError {
    /// Classify a non-success HTTP status returned by the login endpoint.
    pub fn from_login_status(status: u16) -> Self {
        match status {
            401 => AuthError::InvalidCredentials,
            _ => AuthError::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_deserialization() {
        let admin: Role = serde_json::from_str("\"Admin\"").unwrap();
        assert_eq!(admin, Role::Admin);
        let seller: Role = serde_json::from_str("\"Seller\"").unwrap();
        assert_eq!(seller, Role::Seller);
        let other: Role = serde_json::from_str("\"Moderator\"").unwrap();
        assert_eq!(other, Role::Customer);
    }

    #[test]
    fn test_user_info_without_role_is_customer() {
        let json = r#"{"id":"1","username":"ann","full_name":null,"email":null}"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::Customer);
    }

    #[test]
    fn test_auth_error_messages() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid Username or Password"
        );
        assert_eq!(AuthError::Unknown.to_string(), "Oops! Something went wrong.");
        assert_eq!(AuthError::from_login_status(401), AuthError::InvalidCredentials);
        assert_eq!(AuthError::from_login_status(403), AuthError::Unknown);
    }
}
