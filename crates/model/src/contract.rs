//! Forecaster trait
//!
//! Defines the seam between the HTTP layer and the underlying model.

use chrono::NaiveDate;

use crate::error::Result;
use crate::point::ForecastPoint;

/// Common trait for date-indexed forecast models
///
/// Implementations map a sequence of calendar dates to one [`ForecastPoint`]
/// per date, in input order. The trait is object safe so the server can hold
/// the model as `Arc<dyn Forecaster + Send + Sync>` and tests can substitute
/// a fake.
pub trait Forecaster {
    /// Produce one forecast point per requested date, in input order.
    ///
    /// An empty `dates` slice yields an empty vector. Implementations must be
    /// deterministic: equal inputs produce equal outputs.
    fn forecast(&self, dates: &[NaiveDate]) -> Result<Vec<ForecastPoint>>;
}
