use anyhow::Result;
use chrono::Utc;
use contracts::system::auth::Role;
use contracts::system::users::User;

use super::repository;
use crate::system::auth::password;

/// Why a sign-in attempt did not produce a user.
#[derive(Debug, thiserror::Error)]
pub enum CredentialsError {
    #[error("Invalid username or password")]
    Invalid,
    #[error("User account is inactive")]
    Inactive,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub struct NewUser<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub role: Role,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub is_active: bool,
}

/// Create a new user
pub async fn create(new_user: NewUser<'_>) -> Result<String> {
    if new_user.username.trim().is_empty() {
        return Err(anyhow::anyhow!("Username cannot be empty"));
    }

    if repository::get_by_username(new_user.username).await?.is_some() {
        return Err(anyhow::anyhow!("Username already exists"));
    }

    if let Some(email) = new_user.email.as_deref() {
        if !email.trim().is_empty() && !email.contains('@') {
            return Err(anyhow::anyhow!("Invalid email format"));
        }
    }

    let password_hash = password::hash_password(new_user.password)?;

    let user = User {
        id: uuid::Uuid::new_v4().to_string(),
        username: new_user.username.to_string(),
        email: new_user.email,
        full_name: new_user.full_name,
        is_active: new_user.is_active,
        role: new_user.role,
        created_at: Utc::now().to_rfc3339(),
        last_login_at: None,
    };

    repository::create_with_password(&user, &password_hash).await?;

    Ok(user.id)
}

/// Get user by ID
pub async fn get_by_id(id: &str) -> Result<Option<User>> {
    repository::get_by_id(id).await
}

/// Verify user credentials (for login)
pub async fn verify_credentials(username: &str, password: &str) -> Result<User, CredentialsError> {
    let user = repository::get_by_username(username)
        .await?
        .ok_or(CredentialsError::Invalid)?;

    let password_hash = repository::get_password_hash(&user.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Password hash not found"))?;

    if !password::verify_password(password, &password_hash)? {
        return Err(CredentialsError::Invalid);
    }

    // Only reveal the inactive state to someone who knows the password
    if !user.is_active {
        return Err(CredentialsError::Inactive);
    }

    let _ = repository::update_last_login(&user.id).await;

    Ok(user)
}
