//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type: the window over which hours
//! are aggregated into one timesheet.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Number of days in every pay period.
pub const PERIOD_DAYS: u64 = 7;

/// Represents a pay period with its inclusive date range.
///
/// # Example
///
/// ```
/// use attendance_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::week_containing(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
///
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2026, 1, 18).unwrap());
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Creates a period, checking that it spans exactly [`PERIOD_DAYS`] days.
    ///
    /// The start day is the caller's choice (conventionally a Monday), but a
    /// shorter or longer window is refused so that one employee's hours
    /// cannot be split across overlapping timesheets.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<Self> {
        let period = Self {
            start_date,
            end_date,
        };
        period.validate()?;
        Ok(period)
    }

    /// Checks that the period spans exactly [`PERIOD_DAYS`] days.
    pub fn validate(&self) -> EngineResult<()> {
        let invalid = |message: &str| EngineError::InvalidPeriod {
            period_start: self.start_date,
            period_end: self.end_date,
            message: message.to_string(),
        };

        if self.end_date < self.start_date {
            return Err(invalid("period end precedes period start"));
        }
        if self.start_date.checked_add_days(Days::new(PERIOD_DAYS - 1)) != Some(self.end_date) {
            return Err(invalid("period must span exactly 7 days"));
        }
        Ok(())
    }

    /// Returns the Monday–Sunday week that contains `date`.
    pub fn week_containing(date: NaiveDate) -> Self {
        let offset = u64::from(date.weekday().num_days_from_monday());
        let start_date = date - Days::new(offset);
        Self {
            start_date,
            end_date: start_date + Days::new(6),
        }
    }

    /// Checks if a given date falls within this pay period (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Iterates over every day of the period in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start_date
            .iter_days()
            .take_while(move |d| *d <= self.end_date)
    }
}
