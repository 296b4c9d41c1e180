mod config;
mod errors;
mod gateway;
mod handlers;
mod metrics;
mod models;
mod rate_limit;
mod shaper;
mod state;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use clap::Parser;
use config::Args;
use gateway::Gateway;
use handlers::{gemini_handler, health_handler, metrics_handler};
use rate_limit::RateLimiter;
use state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[tokio::main]
async fn main() {
    // parse cli arguments, the API key comes from GEMINI_API_KEY
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // creating shared state
    let state = Arc::new(AppState {
        gateway: Gateway::new(
            args.upstream_url.clone(),
            args.api_key.clone(),
            Duration::from_secs(args.upstream_timeout),
        ),
        rate_limiter: RateLimiter::new(args.rate_limit, Duration::from_secs(args.rate_window)),
    });

    let app = Router::new()
        .route("/", get(health_handler))
        .route("/api/gemini", post(gemini_handler))
        .route("/metrics", get(metrics_handler))
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    info!("proxy running on http://localhost:{}", args.port);
    info!("forwarding to {}", args.upstream_url);
    info!(
        "rate limit: {} requests per {} seconds",
        args.rate_limit, args.rate_window
    );

    // per-connection source address feeds ConnectInfo, the rate-limit identity
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
