//! API route handlers

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use model::{ForecastPoint, ForecastWindow, Forecaster, ModelError};

/// Number of forecast days returned when the client does not ask for any
const DEFAULT_DAYS: i64 = 30;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded model; `None` when the artifact failed to load at startup
    pub model: Option<Arc<dyn Forecaster + Send + Sync>>,
    /// Forecast window, fixed for the process lifetime
    pub window: ForecastWindow,
}

/// Build the API router over the given state.
///
/// Middleware (CORS, request tracing) is layered on by the binary; tests
/// drive this router directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/predict", get(predict))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct PredictQuery {
    /// Raw `days` value; parsed by the handler so a bad value gets the
    /// fixed error body instead of the framework's rejection
    days: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Errors surfaced by the API
#[derive(Debug)]
pub enum ApiError {
    /// `days` did not parse as a positive integer
    InvalidDays,
    /// No model was loaded at startup
    ModelUnavailable,
    /// The model's forecasting call failed
    Forecast(ModelError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidDays => (StatusCode::BAD_REQUEST, "Invalid days parameter"),
            ApiError::ModelUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Model not loaded on server",
            ),
            ApiError::Forecast(ref e) => {
                tracing::error!("forecast failed: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Forecast computation failed",
                )
            }
        };
        (
            status,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

/// `GET /predict?days=N`
///
/// Forecasts over the configured window and returns the first
/// `min(days, window length)` points in chronological order.
pub async fn predict(
    State(state): State<AppState>,
    Query(query): Query<PredictQuery>,
) -> Result<Json<Vec<ForecastPoint>>, ApiError> {
    let days = match query.days.as_deref() {
        None => DEFAULT_DAYS,
        Some(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| ApiError::InvalidDays)?,
    };
    if days <= 0 {
        return Err(ApiError::InvalidDays);
    }

    let model = state.model.as_ref().ok_or(ApiError::ModelUnavailable)?;

    let dates = state.window.dates();
    let mut points = model.forecast(&dates).map_err(ApiError::Forecast)?;
    points.truncate(days as usize);

    Ok(Json(points))
}

/// Liveness probe
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
