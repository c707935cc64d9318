//! Bearer token issuing and validation.
//!
//! Tokens are opaque capabilities: a token either validates or it does not,
//! and no identity travels with it.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub mod memory;

pub use memory::InMemoryTokenStore;

/// Random bytes per token (hex encoding doubles this to 64 characters)
pub const TOKEN_BYTES: usize = 32;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("random source unavailable: {0}")]
    RandomSource(String),
}

/// Storage for issued bearer tokens.
///
/// Implementations must let concurrent `validate` calls proceed together while
/// `issue`, `revoke` and `purge_expired` hold exclusive access.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Create a fresh token valid for the store's lifetime.
    async fn issue(&self) -> Result<String, TokenError>;

    /// True iff the token exists and its expiry is strictly in the future.
    async fn validate(&self, token: &str) -> bool;

    /// Forget the token. Unknown tokens are ignored.
    async fn revoke(&self, token: &str);

    /// Drop every expired entry, returning how many were removed.
    async fn purge_expired(&self) -> usize;
}

/// Periodically purge expired tokens so the map does not grow without bound.
pub fn spawn_sweeper(tokens: Arc<dyn TokenStore>, every: Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        // First tick completes immediately
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let purged = tokens.purge_expired().await;
            if purged > 0 {
                tracing::debug!(purged, "Purged expired tokens");
            }
        }
    })
}
