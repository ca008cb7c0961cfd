use anyhow::{Context, Result};

use crate::shared::config::SeedUser;
use crate::system::users::service::{self as user_service, NewUser};

/// Create the accounts listed in config. Existing usernames are skipped.
pub async fn seed_users(users: &[SeedUser]) -> Result<()> {
    for seed in users {
        if crate::system::users::repository::get_by_username(&seed.username)
            .await?
            .is_some()
        {
            tracing::debug!("User '{}' already exists, skipping", seed.username);
            continue;
        }

        user_service::create(NewUser {
            username: &seed.username,
            password: &seed.password,
            role: seed.role,
            full_name: seed.full_name.clone(),
            email: seed.email.clone(),
            is_active: seed.is_active,
        })
        .await
        .with_context(|| format!("Failed to create user '{}'", seed.username))?;

        tracing::info!("Created user '{}' ({})", seed.username, seed.role);
    }

    if crate::system::users::repository::count().await? == 0 {
        tracing::warn!("No users configured; nobody will be able to sign in");
    }

    Ok(())
}
