use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use salon_booking::config::AppConfig;
use salon_booking::handlers;
use salon_booking::services::api::remote::RemoteBookingApi;
use salon_booking::services::products::ProductPageCache;
use salon_booking::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    tracing::info!("using booking API at {}", config.api_base_url);

    let api = RemoteBookingApi::new(config.api_base_url.clone())?;

    let state = Arc::new(AppState {
        api: Box::new(api),
        products_cache: Mutex::new(ProductPageCache::new(Duration::from_secs(
            config.products_cache_ttl_secs,
        ))),
        submitting: AtomicBool::new(false),
        config: config.clone(),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/form/initial-data", get(handlers::form::initial_data))
        .route("/api/form/products", get(handlers::form::products))
        .route("/api/form/bookings", post(handlers::form::submit))
        .route(
            "/api/consent",
            get(handlers::consent::get_consent)
                .post(handlers::consent::set_consent)
                .delete(handlers::consent::remove_consent),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
