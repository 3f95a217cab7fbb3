//! Vitrine Server — catalog backend with token-gated authentication.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use vitrine_core::config::AppConfig;
use vitrine_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("VITRINE_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Vitrine v{}", env!("CARGO_PKG_VERSION"));

    // ── Database connection + migrations ─────────────────────────
    let db_pool = vitrine_database::connection::DatabasePool::connect(&config.database)
        .await?
        .into_pool();

    vitrine_database::migration::run_migrations(&db_pool).await?;

    // ── Stores ───────────────────────────────────────────────────
    let user_store = Arc::new(vitrine_database::repositories::UserRepository::new(
        db_pool.clone(),
    ));
    let product_store = Arc::new(vitrine_database::repositories::ProductRepository::new(
        db_pool.clone(),
    ));

    // ── Auth system ──────────────────────────────────────────────
    let password_hasher = Arc::new(vitrine_auth::password::PasswordHasher::new(&config.auth));
    let jwt_encoder = Arc::new(vitrine_auth::jwt::JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(vitrine_auth::jwt::JwtDecoder::new(&config.auth));

    // ── HTTP server ──────────────────────────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let app_state = vitrine_api::state::AppState {
        config: Arc::new(config),
        user_store,
        product_store,
        password_hasher,
        jwt_encoder,
        jwt_decoder,
    };

    let app = vitrine_api::router::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Vitrine server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("Vitrine server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
