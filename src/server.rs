//! Router assembly and the serve loop.

use axum::{
    http::HeaderValue,
    middleware,
    routing::{delete, get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::handlers::{athletes, auth, meets, results, system};
use crate::middleware::guard_writes;
use crate::state::AppState;

pub fn app(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        // Public
        .route("/health", get(system::health))
        .route("/api", get(system::root))
        .merge(auth_routes())
        .merge(resource_routes(state.clone()))
        // Global middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/verify", get(auth::verify))
        .route("/api/auth/logout", post(auth::logout))
}

fn resource_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/athletes", get(athletes::list).post(athletes::create))
        .route(
            "/api/athletes/:id",
            get(athletes::get)
                .put(athletes::update)
                .delete(athletes::delete),
        )
        .route("/api/meets", get(meets::list).post(meets::create))
        .route(
            "/api/meets/:id",
            get(meets::get).put(meets::update).delete(meets::delete),
        )
        .route("/api/meets/:id/results", get(meets::results))
        .route("/api/top-times", get(results::top_times))
        .route("/api/results", post(results::create))
        .route("/api/results/:id", delete(results::delete))
        .route_layer(middleware::from_fn_with_state(state, guard_writes))
}

/// Any origin when no origins are configured, otherwise only the listed ones
pub fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Serve until Ctrl+C / SIGTERM
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
