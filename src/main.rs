use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use xc_team_api::auth::{self, InMemoryTokenStore, TokenStore};
use xc_team_api::config;
use xc_team_api::database::{self, MemoryStore, PgStore, Store};
use xc_team_api::server;
use xc_team_api::AppState;

#[derive(Debug, Parser)]
#[command(name = "xc-team-api", version, about = "Jones County XC API server")]
struct Cli {
    /// Port to listen on (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Keep data in memory instead of connecting to Postgres
    #[arg(long)]
    memory: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DB_* and ADMIN_PASSWORD
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = config::config();
    tracing::info!("Starting Jones County XC API in {:?} mode", config.environment);

    let store: Arc<dyn Store> = if cli.memory {
        tracing::warn!("Using in-memory store; data is lost on exit");
        Arc::new(MemoryStore::new())
    } else {
        let pool = database::connect(&config.database)
            .await
            .context("Failed to connect to database")?;
        Arc::new(PgStore::new(pool))
    };

    if config.security.admin_password.is_none() {
        tracing::warn!("ADMIN_PASSWORD is not set; admin login is disabled");
    }
    if config.security.require_auth_for_writes {
        tracing::info!("Write routes require a bearer token");
    }

    let tokens: Arc<dyn TokenStore> =
        Arc::new(InMemoryTokenStore::with_ttl(config.security.token_ttl()));
    if config.security.token_sweep_interval_secs > 0 {
        auth::spawn_sweeper(
            tokens.clone(),
            std::time::Duration::from_secs(config.security.token_sweep_interval_secs),
        );
    }

    let state = AppState::new(store, tokens, &config.security);
    let app = server::app(state, server::cors_layer(&config.server));

    let port = cli.port.unwrap_or(config.server.port);
    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Starting server on {}", bind_addr);
    server::serve(listener, app).await.context("server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
