//! Seasonal trend model
//!
//! The persisted forecasting model: an additive linear trend anchored at an
//! origin date plus day-of-week factors, with residual-scaled uncertainty
//! bounds that widen over the forecast horizon.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::contract::Forecaster;
use crate::error::{ModelError, Result};
use crate::point::ForecastPoint;

/// Fitted additive model: trend plus day-of-week seasonality
///
/// Evaluates `yhat = intercept + slope * t + weekday_factors[weekday]` where
/// `t` is the signed number of days between the forecast date and `origin`.
/// Uncertainty bounds assume residual standard error growing with the square
/// root of the horizon.
///
/// The model is fitted offline; this type only evaluates it. Instances are
/// immutable after construction and safe to share across threads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalTrendModel {
    /// Date the trend is anchored to (t = 0)
    origin: NaiveDate,
    /// Baseline value at the origin
    intercept: f64,
    /// Trend per day
    slope: f64,
    /// Additive day-of-week factors, Monday first
    weekday_factors: Vec<f64>,
    /// Standard deviation of training residuals
    residual_std: f64,
    /// Confidence level for the uncertainty interval (e.g. 0.95)
    confidence_level: f64,
}

impl SeasonalTrendModel {
    /// Create a model from fitted parameters, validating them.
    pub fn new(
        origin: NaiveDate,
        intercept: f64,
        slope: f64,
        weekday_factors: Vec<f64>,
        residual_std: f64,
        confidence_level: f64,
    ) -> Result<Self> {
        let model = Self {
            origin,
            intercept,
            slope,
            weekday_factors,
            residual_std,
            confidence_level,
        };
        model.validate()?;
        Ok(model)
    }

    /// Check that the parameters describe a usable model.
    ///
    /// Deserialization does not validate, so this runs after every artifact
    /// load as well as on construction.
    pub fn validate(&self) -> Result<()> {
        if self.weekday_factors.len() != 7 {
            return Err(ModelError::InvalidArtifact(format!(
                "weekday_factors must have 7 entries, got {}",
                self.weekday_factors.len()
            )));
        }
        if !self.intercept.is_finite() || !self.slope.is_finite() {
            return Err(ModelError::InvalidArtifact(
                "trend coefficients must be finite".to_string(),
            ));
        }
        if self.weekday_factors.iter().any(|f| !f.is_finite()) {
            return Err(ModelError::InvalidArtifact(
                "weekday_factors must be finite".to_string(),
            ));
        }
        if !self.residual_std.is_finite() || self.residual_std < 0.0 {
            return Err(ModelError::InvalidArtifact(format!(
                "residual_std must be non-negative, got {}",
                self.residual_std
            )));
        }
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(ModelError::InvalidArtifact(format!(
                "confidence_level must be in (0, 1), got {}",
                self.confidence_level
            )));
        }
        Ok(())
    }

    /// Date the trend is anchored to
    pub fn origin(&self) -> NaiveDate {
        self.origin
    }

    /// Baseline value at the origin
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Trend per day
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Additive day-of-week factors, Monday first
    pub fn weekday_factors(&self) -> &[f64] {
        &self.weekday_factors
    }

    /// Standard deviation of training residuals
    pub fn residual_std(&self) -> f64 {
        self.residual_std
    }

    /// Confidence level for the uncertainty interval
    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }
}

impl Forecaster for SeasonalTrendModel {
    fn forecast(&self, dates: &[NaiveDate]) -> Result<Vec<ForecastPoint>> {
        let z = z_score(self.confidence_level);

        dates
            .iter()
            .enumerate()
            .map(|(horizon, &ds)| {
                let t = (ds - self.origin).num_days() as f64;
                let season = self.weekday_factors[ds.weekday().num_days_from_monday() as usize];
                let yhat = self.intercept + self.slope * t + season;

                if !yhat.is_finite() {
                    return Err(ModelError::NumericalError(format!(
                        "non-finite forecast for {}",
                        ds
                    )));
                }

                // Standard error grows with the horizon index
                let se = self.residual_std * ((horizon + 1) as f64).sqrt();
                Ok(ForecastPoint {
                    ds,
                    yhat,
                    yhat_lower: yhat - z * se,
                    yhat_upper: yhat + z * se,
                })
            })
            .collect()
    }
}

/// Get z-score for a given confidence level
fn z_score(confidence_level: f64) -> f64 {
    match confidence_level {
        x if x >= 0.99 => 2.576,
        x if x >= 0.95 => 1.96,
        x if x >= 0.90 => 1.645,
        x if x >= 0.80 => 1.282,
        _ => 1.96, // default to 95%
    }
}
