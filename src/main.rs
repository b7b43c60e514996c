use std::sync::{Arc, Mutex};

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use evergreen::config::AppConfig;
use evergreen::handlers;
use evergreen::services::intake::http::HttpIntake;
use evergreen::services::intake::simulated::SimulatedIntake;
use evergreen::services::intake::BookingIntake;
use evergreen::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let intake: Box<dyn BookingIntake> = match config.intake_provider.as_str() {
        "http" => {
            anyhow::ensure!(
                !config.intake_url.is_empty(),
                "INTAKE_URL must be set when INTAKE_PROVIDER=http"
            );
            tracing::info!("using HTTP intake provider (url: {})", config.intake_url);
            Box::new(HttpIntake::new(config.intake_url.clone()))
        }
        _ => {
            tracing::info!(
                "using simulated intake provider (delay: {}ms)",
                config.intake_delay_ms
            );
            Box::new(SimulatedIntake::new(config.intake_delay_ms))
        }
    };

    let state = Arc::new(AppState {
        config: config.clone(),
        intake,
        bookings: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/", get(handlers::pages::index))
        .route("/health", get(handlers::health::health))
        .route("/api/bookings", post(handlers::bookings::submit_booking))
        .route("/api/admin/status", get(handlers::admin::get_status))
        .route("/api/admin/bookings", get(handlers::admin::get_bookings))
        .route(
            "/api/admin/bookings/:id/ics",
            get(handlers::admin::download_ics),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
