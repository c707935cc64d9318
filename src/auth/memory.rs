use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::{rngs::OsRng, RngCore};
use tokio::sync::RwLock;

use super::{TokenError, TokenStore, TOKEN_BYTES};

/// Process-local token store: token -> expiry instant.
///
/// Expired entries stay in the map until `purge_expired` runs, but
/// `validate` never accepts them.
pub struct InMemoryTokenStore {
    tokens: RwLock<HashMap<String, DateTime<Utc>>>,
    ttl: Duration,
}

impl InMemoryTokenStore {
    /// Store with the standard 24 hour lifetime
    pub fn new() -> Self {
        Self::with_ttl(Duration::hours(24))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            tokens: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    pub async fn issue_at(&self, now: DateTime<Utc>) -> Result<String, TokenError> {
        let token = generate_token()?;
        let expires_at = now + self.ttl;

        let mut tokens = self.tokens.write().await;
        tokens.insert(token.clone(), expires_at);
        Ok(token)
    }

    pub async fn validate_at(&self, token: &str, now: DateTime<Utc>) -> bool {
        let tokens = self.tokens.read().await;
        tokens.get(token).is_some_and(|expires_at| *expires_at > now)
    }

    pub async fn purge_expired_at(&self, now: DateTime<Utc>) -> usize {
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|_, expires_at| *expires_at > now);
        before - tokens.len()
    }

    /// Number of entries held, expired ones included
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }
}

impl Default for InMemoryTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn issue(&self) -> Result<String, TokenError> {
        self.issue_at(Utc::now()).await
    }

    async fn validate(&self, token: &str) -> bool {
        self.validate_at(token, Utc::now()).await
    }

    async fn revoke(&self, token: &str) {
        let mut tokens = self.tokens.write().await;
        tokens.remove(token);
    }

    async fn purge_expired(&self) -> usize {
        self.purge_expired_at(Utc::now()).await
    }
}

/// 32 bytes from the OS random source, hex encoded
fn generate_token() -> Result<String, TokenError> {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| TokenError::RandomSource(e.to_string()))?;
    Ok(hex::encode(bytes))
}
