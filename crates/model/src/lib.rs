//! # model
//!
//! Potato price forecasting domain for tubercast.
//!
//! The model is fitted offline and shipped as a JSON artifact; this crate
//! loads the artifact, validates it, and evaluates forecasts over calendar
//! date sequences:
//!
//! - [`Forecaster`]: trait implemented by anything that can turn dates into
//!   forecast points
//! - [`SeasonalTrendModel`]: the persisted additive trend + day-of-week model
//! - [`ForecastPoint`]: one dated estimate with an uncertainty interval
//! - [`ForecastWindow`]: the closed daily date range forecasts are computed over
//!
//! ## Example
//!
//! ```rust,ignore
//! use model::{load_model, Forecaster};
//!
//! let model = load_model("model.json".as_ref())?;
//! let window = model::ForecastWindow::new(start, end)?;
//! let points = model.forecast(&window.dates())?;
//! ```

pub mod artifact;
pub mod contract;
pub mod error;
pub mod point;
pub mod seasonal;
pub mod window;

pub use artifact::{load_model, save_model};
pub use contract::Forecaster;
pub use error::{ModelError, Result};
pub use point::ForecastPoint;
pub use seasonal::SeasonalTrendModel;
pub use window::ForecastWindow;
