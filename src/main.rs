// src/main.rs

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod analytics;
mod config;
mod db;
mod models;
mod routes;

use analytics::AnalyticsCache;
use config::Config;
use db::{FeedbackStore, PgFeedbackStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FeedbackStore>,
    pub cache: Arc<AnalyticsCache>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from .env if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let pool = db::connect(&config).await?;
    let state = AppState {
        store: Arc::new(PgFeedbackStore::new(pool)),
        cache: Arc::new(AnalyticsCache::with_capacity(config.cache_capacity)),
    };

    // Permissive CORS for the dashboard front-end in local dev
    let cors = if config.cors_allow_any {
        CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    let api = Router::new()
        .route("/health", get(routes::health::health))
        .route(
            "/api/v1/interviews/:interview_id/feedback",
            get(routes::feedback::list_feedback),
        )
        .route(
            "/api/v1/interviews/:interview_id/analytics",
            get(routes::analytics::get_analytics),
        )
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "feedback API listening");

    axum::serve(listener, api.into_make_service()).await?;
    Ok(())
}
