//! Forecast point model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One dated estimate with a central value and an uncertainty interval.
///
/// Field names match the wire format consumed by the frontend: `ds` is the
/// ISO calendar date, `yhat` the point estimate, `yhat_lower`/`yhat_upper`
/// the interval bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Forecast date, serialized as `YYYY-MM-DD`
    pub ds: NaiveDate,
    /// Point estimate
    pub yhat: f64,
    /// Lower bound of the uncertainty interval
    pub yhat_lower: f64,
    /// Upper bound of the uncertainty interval
    pub yhat_upper: f64,
}
