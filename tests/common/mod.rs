#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::Value;
use tower_http::cors::CorsLayer;

use xc_team_api::auth::InMemoryTokenStore;
use xc_team_api::config::SecurityConfig;
use xc_team_api::database::MemoryStore;
use xc_team_api::AppState;

pub const ADMIN_PASSWORD: &str = "harrier-pack-2024";

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub client: reqwest::Client,
    pub tokens: Arc<InMemoryTokenStore>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Log in with the test password and return the token
    pub async fn login(&self) -> Result<String> {
        let res = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&serde_json::json!({ "password": ADMIN_PASSWORD }))
            .send()
            .await?;
        anyhow::ensure!(res.status().is_success(), "login failed: {}", res.status());
        let body: Value = res.json().await?;
        body["token"]
            .as_str()
            .map(str::to_string)
            .context("login response missing token")
    }
}

/// Start an in-process server backed by the in-memory store
pub async fn spawn_server() -> Result<TestServer> {
    spawn_server_with(SecurityConfig {
        admin_password: Some(ADMIN_PASSWORD.to_string()),
        ..SecurityConfig::default()
    })
    .await
}

pub async fn spawn_server_with(security: SecurityConfig) -> Result<TestServer> {
    // Pick an unused port for isolation
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let base_url = format!("http://127.0.0.1:{}", port);

    let tokens = Arc::new(InMemoryTokenStore::new());
    let state = AppState::new(Arc::new(MemoryStore::new()), tokens.clone(), &security);
    let app = xc_team_api::app(state, CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .with_context(|| format!("failed to bind {}", base_url))?;
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server");
    });

    Ok(TestServer {
        port,
        base_url,
        client: reqwest::Client::new(),
        tokens,
    })
}
