//! Server configuration
//!
//! All configuration comes from the environment (with `.env` support in the
//! binary) and is read once at startup. The forecast window is configuration
//! too: requests never change it.

use std::env;
use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use model::ForecastWindow;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "5000";
const DEFAULT_MODEL_PATH: &str = "model.json";
const DEFAULT_WINDOW_START: &str = "2025-10-05";
const DEFAULT_WINDOW_END: &str = "2025-11-05";

/// Errors raised while reading configuration at startup
///
/// Unlike a missing model artifact, bad configuration has no degraded mode:
/// the process refuses to start.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

/// Runtime configuration, read once at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind to (`HOST`)
    pub host: String,
    /// Port to listen on (`PORT`)
    pub port: u16,
    /// Path to the model artifact (`MODEL_PATH`)
    pub model_path: PathBuf,
    /// Forecast window (`FORECAST_WINDOW_START` / `FORECAST_WINDOW_END`)
    pub window: ForecastWindow,
}

impl ServerConfig {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port_raw = env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());
        let port = parse_port(&port_raw)?;

        let model_path =
            PathBuf::from(env::var("MODEL_PATH").unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string()));

        let start_raw =
            env::var("FORECAST_WINDOW_START").unwrap_or_else(|_| DEFAULT_WINDOW_START.to_string());
        let end_raw =
            env::var("FORECAST_WINDOW_END").unwrap_or_else(|_| DEFAULT_WINDOW_END.to_string());
        let window = parse_window(&start_raw, &end_raw)?;

        Ok(Self {
            host,
            port,
            model_path,
            window,
        })
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
        name: "PORT",
        reason: format!("'{}' is not a valid port number", raw),
    })
}

fn parse_window(start: &str, end: &str) -> Result<ForecastWindow, ConfigError> {
    let start = parse_date("FORECAST_WINDOW_START", start)?;
    let end = parse_date("FORECAST_WINDOW_END", end)?;
    ForecastWindow::new(start, end).map_err(|e| ConfigError::InvalidValue {
        name: "FORECAST_WINDOW_START/FORECAST_WINDOW_END",
        reason: e.to_string(),
    })
}

fn parse_date(name: &'static str, raw: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ConfigError::InvalidValue {
        name,
        reason: format!("'{}' is not a valid YYYY-MM-DD date", raw),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port_valid() {
        assert_eq!(parse_port("5000").unwrap(), 5000);
        assert_eq!(parse_port("8080").unwrap(), 8080);
    }

    #[test]
    fn test_parse_port_invalid() {
        for raw in ["", "abc", "-1", "70000"] {
            assert!(parse_port(raw).is_err(), "'{}' should be rejected", raw);
        }
    }

    #[test]
    fn test_parse_window_defaults_span_32_days() {
        let window = parse_window(DEFAULT_WINDOW_START, DEFAULT_WINDOW_END).unwrap();
        assert_eq!(window.num_days(), 32);
        assert_eq!(window.to_string(), "2025-10-05..=2025-11-05");
    }

    #[test]
    fn test_parse_window_rejects_bad_dates() {
        assert!(parse_window("2025-13-01", "2025-11-05").is_err());
        assert!(parse_window("not-a-date", "2025-11-05").is_err());
        assert!(parse_window("2025-10-05", "05/11/2025").is_err());
    }

    #[test]
    fn test_parse_window_rejects_inverted_range() {
        let result = parse_window("2025-11-05", "2025-10-05");
        let message = result.unwrap_err().to_string();
        assert!(message.contains("FORECAST_WINDOW_START"));
    }

    #[test]
    fn test_config_error_message() {
        let error = ConfigError::InvalidValue {
            name: "PORT",
            reason: "'abc' is not a valid port number".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value for PORT: 'abc' is not a valid port number"
        );
    }
}
