//! Forecast window model

use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Closed calendar interval forecasts are computed over, daily granularity.
///
/// The window is configuration: it is constructed once at startup and never
/// derived from request input or from the current time. Both endpoints are
/// included in the date sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl ForecastWindow {
    /// Create a window spanning `start..=end`.
    ///
    /// Returns `InvalidParameter` when `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(ModelError::InvalidParameter {
                name: "window".to_string(),
                reason: format!("start {} is after end {}", start, end),
            });
        }
        Ok(Self { start, end })
    }

    /// First day of the window
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the window
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days in the window, both endpoints included.
    pub fn num_days(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    /// Daily date sequence in ascending order, both endpoints included.
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates = Vec::with_capacity(self.num_days());
        let mut day = self.start;
        while day <= self.end {
            dates.push(day);
            day += Duration::days(1);
        }
        dates
    }
}

impl fmt::Display for ForecastWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
