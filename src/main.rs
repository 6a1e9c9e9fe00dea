mod config;
mod dto;
mod handlers;
mod models;
mod repository;
mod service;

use axum::{Router, http::HeaderValue};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use std::sync::Arc;

use handlers::rest;
use repository::{MemoryRepository, NoteRepository, PostgresRepository};
use service::NoteService;

async fn build_repository(cfg: &config::Config) -> Arc<dyn NoteRepository> {
    let Some(dsn) = &cfg.database_dsn else {
        tracing::info!("No database configured, storing notes in memory");
        return Arc::new(MemoryRepository::new());
    };

    let mut repo = PostgresRepository::new(dsn)
        .await
        .expect("failed to establish database connection");

    repo.migrate().await.expect("failed to migrate database");

    tracing::info!("Storing notes in Postgres");
    Arc::new(repo)
}

fn with_cors(router: Router, cors_origin: Option<&str>) -> Router {
    let Some(origin) = cors_origin else {
        return router;
    };

    let origin = origin
        .parse::<HeaderValue>()
        .expect("CORS origin must be a valid header value");

    tracing::info!("Allowing cross-origin requests from {:?}", origin);
    router.layer(
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt::init();

    // Load config
    let cfg = config::load_config().expect("failed to locate or load config file");
    tracing::info!("Successfully loaded notes API config");

    // Repository and service creation
    let repo = build_repository(&cfg).await;
    let service = Arc::new(NoteService::new(repo));

    // Router config
    let router = with_cors(rest::router(service), cfg.cors_origin.as_deref())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(cfg.bind_address())
        .await
        .expect("failed to bind to address");
    let addr = listener
        .local_addr()
        .expect("failed to read listener address");

    // Starting router
    tracing::info!("Notes API listening on {}", addr);
    axum::serve(listener, router)
        .await
        .expect("failed to start server");
}
