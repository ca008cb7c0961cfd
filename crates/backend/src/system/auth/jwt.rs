use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use contracts::system::auth::{Role, TokenClaims};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::OnceCell;
use rand::Rng;

use crate::shared::config::AuthConfig;

#[derive(Debug, Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub access_token_hours: i64,
    pub refresh_token_days: i64,
}

impl JwtSettings {
    /// Build from config, generating a secret when none is configured.
    pub fn from_config(config: &AuthConfig) -> Self {
        let secret = match config.jwt_secret.as_deref() {
            Some(secret) if !secret.trim().is_empty() => secret.to_string(),
            _ => {
                tracing::warn!("No jwt_secret configured, generated a random one; tokens will not survive a restart");
                generate_jwt_secret()
            }
        };

        Self {
            secret,
            access_token_hours: config.access_token_hours,
            refresh_token_days: config.refresh_token_days,
        }
    }
}

static SETTINGS: OnceCell<JwtSettings> = OnceCell::new();

/// Install the process-wide JWT settings. Later calls are ignored.
pub fn initialize(settings: JwtSettings) {
    if SETTINGS.set(settings).is_err() {
        tracing::warn!("JWT settings already initialized");
    }
}

fn settings() -> Result<&'static JwtSettings> {
    SETTINGS
        .get()
        .context("JWT settings are not initialized")
}

/// Generate JWT access token
pub fn generate_access_token(user_id: &str, username: &str, role: Role) -> Result<String> {
    encode_access_token(settings()?, user_id, username, role, Utc::now())
}

/// Validate JWT token and extract claims
pub fn validate_token(token: &str) -> Result<TokenClaims> {
    decode_access_token(settings()?, token)
}

pub fn encode_access_token(
    settings: &JwtSettings,
    user_id: &str,
    username: &str,
    role: Role,
    now: DateTime<Utc>,
) -> Result<String> {
    let exp = (now + chrono::Duration::hours(settings.access_token_hours)).timestamp() as usize;
    let iat = now.timestamp() as usize;

    let claims = TokenClaims {
        sub: user_id.to_string(),
        username: username.to_string(),
        role,
        exp,
        iat,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(settings.secret.as_bytes()),
    )
    .context("Failed to encode JWT token")
}

pub fn decode_access_token(settings: &JwtSettings, token: &str) -> Result<TokenClaims> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(settings.secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT token")?;

    Ok(token_data.claims)
}

/// Generate refresh token (UUID-based)
pub fn generate_refresh_token() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Refresh token expiration measured from `now`
pub fn refresh_token_expiration(now: DateTime<Utc>) -> Result<DateTime<Utc>> {
    Ok(now + chrono::Duration::days(settings()?.refresh_token_days))
}

/// Generate a cryptographically secure JWT secret (256 bits)
fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(&random_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_settings(secret: &str) -> JwtSettings {
        JwtSettings {
            secret: secret.to_string(),
            access_token_hours: 1,
            refresh_token_days: 1,
        }
    }

    #[test]
    fn test_token_carries_role() {
        let settings = test_settings("unit-test-secret");
        let token =
            encode_access_token(&settings, "u-1", "seller", Role::Seller, Utc::now()).unwrap();
        let claims = decode_access_token(&settings, &token).unwrap();
        assert_eq!(claims.sub, "u-1");
        assert_eq!(claims.username, "seller");
        assert_eq!(claims.role, Role::Seller);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = encode_access_token(
            &test_settings("one"),
            "u-1",
            "admin",
            Role::Admin,
            Utc::now(),
        )
        .unwrap();
        assert!(decode_access_token(&test_settings("two"), &token).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let settings = test_settings("unit-test-secret");
        let issued = Utc::now() - chrono::Duration::hours(3);
        let token = encode_access_token(&settings, "u-1", "admin", Role::Admin, issued).unwrap();
        assert!(decode_access_token(&settings, &token).is_err());
    }

    #[test]
    fn test_generated_secret_is_used_when_missing() {
        let settings = JwtSettings::from_config(&AuthConfig::default());
        assert!(!settings.secret.is_empty());
        assert_eq!(settings.access_token_hours, 24);
    }
}
