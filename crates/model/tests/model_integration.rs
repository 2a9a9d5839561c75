//! End-to-end tests for the model crate: artifact round-trips feeding the
//! forecast path the server uses.

use chrono::NaiveDate;
use model::{load_model, save_model, Forecaster, ForecastWindow, ModelError, SeasonalTrendModel};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn fitted_model() -> SeasonalTrendModel {
    SeasonalTrendModel::new(
        date(2025, 10, 1),
        21.0,
        0.15,
        vec![0.3, 0.1, 0.0, -0.1, -0.2, -0.2, 0.1],
        1.2,
        0.95,
    )
    .unwrap()
}

#[test]
fn loaded_model_forecasts_identically_to_original() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    let model = fitted_model();
    save_model(&path, &model).unwrap();

    let loaded = load_model(&path).unwrap();

    let window = ForecastWindow::new(date(2025, 10, 5), date(2025, 11, 5)).unwrap();
    let dates = window.dates();
    let original_points = model.forecast(&dates).unwrap();
    let loaded_points = loaded.forecast(&dates).unwrap();

    assert_eq!(original_points, loaded_points);
}

#[test]
fn forecast_over_window_covers_every_day_in_order() {
    let model = fitted_model();
    let window = ForecastWindow::new(date(2025, 10, 5), date(2025, 11, 5)).unwrap();

    let points = model.forecast(&window.dates()).unwrap();

    assert_eq!(points.len(), 32);
    assert_eq!(points[0].ds, date(2025, 10, 5));
    assert_eq!(points[31].ds, date(2025, 11, 5));
    for pair in points.windows(2) {
        assert!(pair[0].ds < pair[1].ds);
        assert_eq!((pair[1].ds - pair[0].ds).num_days(), 1);
    }
    for point in &points {
        assert!(point.yhat_lower <= point.yhat);
        assert!(point.yhat <= point.yhat_upper);
    }
}

#[test]
fn artifact_edited_to_be_invalid_is_rejected_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    save_model(&path, &fitted_model()).unwrap();

    // Corrupt the artifact the way a bad training export would
    let text = std::fs::read_to_string(&path).unwrap();
    let corrupted = text.replace("\"residual_std\": 1.2", "\"residual_std\": -1.2");
    std::fs::write(&path, corrupted).unwrap();

    let result = load_model(&path);
    assert!(matches!(result.unwrap_err(), ModelError::InvalidArtifact(_)));
}
