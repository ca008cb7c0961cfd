//! In-memory user store.

use anyhow::Result;
use chrono::Utc;
use contracts::system::users::User;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::RwLock;

struct StoredUser {
    user: User,
    password_hash: String,
}

static USERS: Lazy<RwLock<HashMap<String, StoredUser>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

fn lock_err<T>(_: T) -> anyhow::Error {
    anyhow::anyhow!("User store lock poisoned")
}

/// Create user with password hash
pub async fn create_with_password(user: &User, password_hash: &str) -> Result<()> {
    let mut users = USERS.write().map_err(lock_err)?;
    if users.values().any(|u| u.user.username == user.username) {
        return Err(anyhow::anyhow!("Username already exists: {}", user.username));
    }
    users.insert(
        user.id.clone(),
        StoredUser {
            user: user.clone(),
            password_hash: password_hash.to_string(),
        },
    );
    Ok(())
}

/// Get user by ID
pub async fn get_by_id(id: &str) -> Result<Option<User>> {
    let users = USERS.read().map_err(lock_err)?;
    Ok(users.get(id).map(|u| u.user.clone()))
}

/// Get user by username
pub async fn get_by_username(username: &str) -> Result<Option<User>> {
    let users = USERS.read().map_err(lock_err)?;
    Ok(users
        .values()
        .find(|u| u.user.username == username)
        .map(|u| u.user.clone()))
}

pub async fn get_password_hash(id: &str) -> Result<Option<String>> {
    let users = USERS.read().map_err(lock_err)?;
    Ok(users.get(id).map(|u| u.password_hash.clone()))
}

pub async fn update_last_login(id: &str) -> Result<()> {
    let mut users = USERS.write().map_err(lock_err)?;
    if let Some(stored) = users.get_mut(id) {
        stored.user.last_login_at = Some(Utc::now().to_rfc3339());
    }
    Ok(())
}

pub async fn count() -> Result<usize> {
    Ok(USERS.read().map_err(lock_err)?.len())
}
