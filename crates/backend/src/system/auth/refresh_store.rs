//! Refresh tokens, kept in memory as SHA-256 hashes.
//!
//! Only live tokens are kept: revoking removes the record, and every write
//! drops records that have expired.

use anyhow::Result;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::RwLock;

struct RefreshTokenRecord {
    user_id: String,
    expires_at: DateTime<Utc>,
}

#[derive(Default)]
pub struct RefreshTokenStore {
    tokens: RwLock<HashMap<String, RefreshTokenRecord>>,
}

fn lock_err<T>(_: T) -> anyhow::Error {
    anyhow::anyhow!("Refresh token store lock poisoned")
}

impl RefreshTokenStore {
    /// Remember `token` until `expires_at`, dropping records expired at `now`.
    pub fn store(
        &self,
        user_id: &str,
        token: &str,
        expires_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let mut tokens = self.tokens.write().map_err(lock_err)?;
        tokens.retain(|_, record| record.expires_at > now);
        if expires_at > now {
            tokens.insert(
                hash_token(token),
                RefreshTokenRecord {
                    user_id: user_id.to_string(),
                    expires_at,
                },
            );
        }
        Ok(())
    }

    /// User id owning a live token.
    pub fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<String> {
        let tokens = self.tokens.read().map_err(lock_err)?;
        match tokens.get(&hash_token(token)) {
            Some(record) if record.expires_at > now => Ok(record.user_id.clone()),
            _ => Err(anyhow::anyhow!("Invalid or expired refresh token")),
        }
    }

    /// Forget a token. Unknown tokens are ignored.
    pub fn revoke(&self, token: &str, now: DateTime<Utc>) -> Result<()> {
        let mut tokens = self.tokens.write().map_err(lock_err)?;
        tokens.remove(&hash_token(token));
        tokens.retain(|_, record| record.expires_at > now);
        Ok(())
    }

    #[cfg(test)]
    fn live_count(&self) -> Result<usize> {
        Ok(self.tokens.read().map_err(lock_err)?.len())
    }
}

static TOKENS: Lazy<RefreshTokenStore> = Lazy::new(RefreshTokenStore::default);

pub fn store(user_id: &str, token: &str, expires_at: DateTime<Utc>) -> Result<()> {
    TOKENS.store(user_id, token, expires_at, Utc::now())
}

pub fn validate(token: &str, now: DateTime<Utc>) -> Result<String> {
    TOKENS.validate(token, now)
}

pub fn revoke(token: &str, now: DateTime<Utc>) -> Result<()> {
    TOKENS.revoke(token, now)
}

fn hash_token(token: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn new_token() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    #[test]
    fn test_store_validate_revoke() {
        let now = Utc::now();
        let token = new_token();
        store("user-1", &token, now + Duration::days(1)).unwrap();

        assert_eq!(validate(&token, now).unwrap(), "user-1");

        revoke(&token, now).unwrap();
        assert!(validate(&token, now).is_err());
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let store = RefreshTokenStore::default();
        let now = Utc::now();
        let token = new_token();
        store
            .store("user-2", &token, now + Duration::seconds(1), now)
            .unwrap();
        assert!(store.validate(&token, now + Duration::seconds(2)).is_err());
    }

    #[test]
    fn test_unknown_token() {
        assert!(validate("never-issued", Utc::now()).is_err());
        assert!(revoke("never-issued", Utc::now()).is_ok());
    }

    #[test]
    fn test_revoked_and_expired_records_are_dropped() {
        let store = RefreshTokenStore::default();
        let now = Utc::now();

        let tokens: Vec<String> = (0..100).map(|_| new_token()).collect();
        for token in &tokens {
            store
                .store("user-3", token, now - Duration::seconds(1), now)
                .unwrap();
        }
        assert_eq!(store.live_count().unwrap(), 0);

        for token in &tokens {
            store
                .store("user-3", token, now + Duration::days(1), now)
                .unwrap();
        }
        assert_eq!(store.live_count().unwrap(), 100);
        for token in &tokens {
            store.revoke(token, now).unwrap();
        }
        assert_eq!(store.live_count().unwrap(), 0);
    }

    #[test]
    fn test_store_sweeps_records_expired_since() {
        let store = RefreshTokenStore::default();
        let now = Utc::now();
        store
            .store("user-4", &new_token(), now + Duration::minutes(1), now)
            .unwrap();
        assert_eq!(store.live_count().unwrap(), 1);

        let later = now + Duration::minutes(2);
        let fresh = new_token();
        store
            .store("user-4", &fresh, later + Duration::days(1), later)
            .unwrap();
        assert_eq!(store.live_count().unwrap(), 1);
        assert_eq!(store.validate(&fresh, later).unwrap(), "user-4");
    }
}
