//! Application state shared across handlers

use std::sync::Arc;

use crate::auth::TokenStore;
use crate::config::SecurityConfig;
use crate::database::Store;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Arc<dyn Store>,
    tokens: Arc<dyn TokenStore>,
    admin_password: Option<String>,
    require_auth_for_writes: bool,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, tokens: Arc<dyn TokenStore>, security: &SecurityConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store,
                tokens,
                admin_password: security.admin_password.clone().filter(|p| !p.is_empty()),
                require_auth_for_writes: security.require_auth_for_writes,
            }),
        }
    }

    pub fn store(&self) -> &dyn Store {
        self.inner.store.as_ref()
    }

    pub fn tokens(&self) -> &dyn TokenStore {
        self.inner.tokens.as_ref()
    }

    pub fn require_auth_for_writes(&self) -> bool {
        self.inner.require_auth_for_writes
    }

    /// Byte-for-byte comparison against the configured admin password.
    /// Always false when no password is configured.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.inner
            .admin_password
            .as_deref()
            .is_some_and(|expected| expected.as_bytes() == candidate.as_bytes())
    }
}
