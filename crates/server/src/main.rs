//! # tubercast server
//!
//! REST API server for potato price forecasts. Loads a pre-fitted model
//! artifact at startup and serves forecasts over a configured date window.

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use model::Forecaster;
use server::config::ServerConfig;
use server::routes::{self, AppState};

#[tokio::main]
async fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "server=info,tower_http=info".into()),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // Load model. Failure leaves the service up in a degraded state where
    // every /predict request reports the missing model.
    let loaded = match model::load_model(&config.model_path) {
        Ok(m) => {
            tracing::info!("Model loaded from {}", config.model_path.display());
            Some(Arc::new(m) as Arc<dyn Forecaster + Send + Sync>)
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load model from {}: {e}",
                config.model_path.display()
            );
            None
        }
    };

    let state = AppState {
        model: loaded,
        window: config.window,
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with middleware
    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Invalid HOST:PORT configuration");

    tracing::info!(
        "tubercast server v{} listening on {}, forecast window {}",
        env!("CARGO_PKG_VERSION"),
        addr,
        config.window
    );

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
