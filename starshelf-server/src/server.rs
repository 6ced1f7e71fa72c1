//! Main server module - Axum setup and router configuration

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{http::HeaderValue, routing::get, Router};
use clap::Parser;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::routes::{self, ServerState, SharedState};
use crate::store::Store;

const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Server command-line arguments
#[derive(Parser, Debug, Clone)]
pub struct ServerArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8000")]
    pub port: u16,

    /// Bind address
    #[arg(short, long, default_value = "127.0.0.1")]
    pub bind: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,

    /// Origin allowed by CORS
    #[arg(long, default_value = DEFAULT_CORS_ORIGIN)]
    pub cors_origin: String,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

impl Default for ServerArgs {
    fn default() -> Self {
        Self {
            port: 8000,
            bind: "127.0.0.1".to_string(),
            timeout: 30,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            cors_permissive: false,
        }
    }
}

/// Run the server with the given arguments
pub async fn run_server(args: ServerArgs) -> anyhow::Result<()> {
    // Fresh, empty collection per process; state is lost on restart
    let store = Store::new();
    let state = Arc::new(RwLock::new(ServerState::new(store.clone())));

    let app = create_router(store, state, &args);

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port)
        .parse()
        .context("invalid bind address")?;

    info!("Starting starshelf-server on http://{}", addr);

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Create the Axum router with all routes
pub fn create_router(store: Store, state: SharedState, args: &ServerArgs) -> Router {
    let cors = if args.cors_permissive {
        warn!("CORS: permissive mode enabled - all origins allowed");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origin = args
            .cors_origin
            .parse::<HeaderValue>()
            .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_CORS_ORIGIN));
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Middleware stack
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(args.timeout)))
        .layer(cors);

    Router::new()
        // Liveness + health
        .route("/", get(routes::root))
        .route("/health", get(routes::health_check))
        // Repos
        .route(
            "/repos",
            get(routes::list_repos).post(routes::create_repo),
        )
        .route(
            "/repos/{id}",
            get(routes::get_repo)
                .put(routes::update_repo)
                .delete(routes::delete_repo),
        )
        .route("/repos/search/{query}", get(routes::search_repos))
        // Stats
        .route("/stats", get(routes::get_stats))
        // State
        .with_state(store)
        // Health needs full state for uptime
        .layer(axum::Extension(state))
        .layer(middleware)
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
