use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

/// Issued tokens never outlive this many hours
pub const MAX_TOKEN_TTL_HOURS: u64 = 24;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
    pub connection_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    /// Empty means any origin is allowed.
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// `None` disables login entirely.
    #[serde(skip_serializing)]
    pub admin_password: Option<String>,
    pub token_ttl_hours: u64,
    /// 0 disables the background sweep of expired tokens.
    pub token_sweep_interval_secs: u64,
    pub require_auth_for_writes: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Database overrides
        if let Ok(v) = env::var("DB_HOST") {
            self.database.host = v;
        }
        if let Ok(v) = env::var("DB_PORT") {
            self.database.port = v.parse().unwrap_or(self.database.port);
        }
        if let Ok(v) = env::var("DB_USER") {
            self.database.user = v;
        }
        if let Ok(v) = env::var("DB_PASSWORD") {
            self.database.password = v;
        }
        if let Ok(v) = env::var("DB_NAME") {
            self.database.name = v;
        }
        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Ok(v) = env::var("DATABASE_CONNECTION_TIMEOUT") {
            self.database.connection_timeout = v.parse().unwrap_or(self.database.connection_timeout);
        }

        // Server overrides
        if let Ok(v) = env::var("PORT") {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }
        if let Ok(v) = env::var("SECURITY_CORS_ORIGINS") {
            self.server.cors_origins = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        // Security overrides
        if let Ok(v) = env::var("ADMIN_PASSWORD") {
            self.security.admin_password = Some(v).filter(|p| !p.is_empty());
        }
        if let Ok(v) = env::var("TOKEN_TTL_HOURS") {
            match parse_token_ttl_hours(&v) {
                Some(hours) => self.security.token_ttl_hours = hours,
                None => tracing::warn!(
                    value = %v,
                    default = self.security.token_ttl_hours,
                    "TOKEN_TTL_HOURS must be between 1 and {}; keeping default",
                    MAX_TOKEN_TTL_HOURS
                ),
            }
        }
        if let Ok(v) = env::var("TOKEN_SWEEP_INTERVAL_SECS") {
            self.security.token_sweep_interval_secs =
                v.parse().unwrap_or(self.security.token_sweep_interval_secs);
        }
        if let Ok(v) = env::var("REQUIRE_AUTH_FOR_WRITES") {
            self.security.require_auth_for_writes =
                v.parse().unwrap_or(self.security.require_auth_for_writes);
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            database: DatabaseConfig::default(),
            server: ServerConfig {
                port: 8080,
                cors_origins: Vec::new(),
            },
            security: SecurityConfig::default(),
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            database: DatabaseConfig {
                max_connections: 20,
                connection_timeout: 5,
                ..DatabaseConfig::default()
            },
            server: ServerConfig {
                port: 8080,
                cors_origins: vec!["http://localhost:5173".to_string()],
            },
            security: SecurityConfig::default(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: String::new(),
            name: "jones_county_xc".to_string(),
            max_connections: 10,
            connection_timeout: 30,
        }
    }
}

impl SecurityConfig {
    /// Token lifetime, clamped to `1..=MAX_TOKEN_TTL_HOURS` hours
    pub fn token_ttl(&self) -> chrono::Duration {
        let hours = self.token_ttl_hours.clamp(1, MAX_TOKEN_TTL_HOURS);
        chrono::Duration::hours(hours as i64)
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            admin_password: None,
            token_ttl_hours: 24,
            token_sweep_interval_secs: 3600,
            require_auth_for_writes: false,
        }
    }
}

/// Accepts whole hours in `1..=MAX_TOKEN_TTL_HOURS`
fn parse_token_ttl_hours(raw: &str) -> Option<u64> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|hours| (1..=MAX_TOKEN_TTL_HOURS).contains(hours))
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
