//! dsquiz API Server
//!
//! Usage:
//!   cargo run --bin dsquiz_api
//!
//! Environment:
//!   QUIZ_HOST            - Server host (default: 0.0.0.0)
//!   PORT / QUIZ_PORT     - Server port (default: 5000)
//!   QUIZ_DATA_PATH       - Question bank CSV (default: data/questions.csv)
//!   QUIZ_SEED_IF_MISSING - Write sample questions on first run (default: true)
//!   RUST_LOG             - Log filter (default: info)

use dsquiz::api::{create_router, AppState};
use dsquiz::core::seed::ensure_question_bank;
use dsquiz::utils::constants::{APP_NAME, APP_VERSION};
use dsquiz::{ServerConfig, TelemetryCollector};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = ServerConfig::from_env()?;

    if config.seed_if_missing {
        match ensure_question_bank(&config.data_path) {
            Ok(true) => info!("Question bank created at {}", config.data_path.display()),
            Ok(false) => {}
            Err(e) => warn!("Could not create sample question bank: {}", e),
        }
    }

    let addr = config.socket_addr().await?;
    let telemetry = Arc::new(TelemetryCollector::new());
    let telemetry_for_shutdown = telemetry.clone();
    let state = Arc::new(AppState::new(config, telemetry));
    let app = create_router(state);

    info!("{} v{} starting on http://{}", APP_NAME, APP_VERSION, addr);
    info!("Endpoints:");
    info!("  GET  /                 - Quiz page");
    info!("  POST /get_questions    - Questions with fixtures");
    info!("  POST /v1/questions     - Same, versioned path");
    info!("  GET  /v1/topics        - Topics and fixture bounds");
    info!("  GET  /v1/stats         - Request statistics");
    info!("  GET  /v1/health        - Health check");

    let listener = TcpListener::bind(addr).await?;

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    let stats = telemetry_for_shutdown.get_stats();
    info!("Shutdown signal received");
    info!("   Requests served:   {}", stats.requests_served);
    info!("   Requests rejected: {}", stats.requests_rejected);
    info!("   Questions served:  {}", stats.questions_served);
    info!("   Avg latency:       {:.2}ms", stats.avg_latency_ms);

    Ok(())
}
