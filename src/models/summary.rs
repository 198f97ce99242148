//! Weekly hour summaries.
//!
//! These types are derived from the punch ledger on demand and are never
//! persisted on their own. A [`WeeklySummary`] is snapshotted into a
//! [`Timesheet`](super::Timesheet) on submission.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayPeriod;

/// Aggregated hours and estimated pay for one employee over one period.
///
/// `total_hours` always equals `regular_hours + overtime_hours`.
///
/// # Example
///
/// ```
/// use attendance_engine::models::WeeklySummary;
/// use rust_decimal::Decimal;
///
/// let summary = WeeklySummary::default();
/// assert_eq!(summary.total_hours, Decimal::ZERO);
/// assert_eq!(summary.estimated_pay, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// Hours up to the weekly overtime threshold.
    pub regular_hours: Decimal,
    /// Hours beyond the weekly overtime threshold.
    pub overtime_hours: Decimal,
    /// All worked hours, net of breaks.
    pub total_hours: Decimal,
    /// Hours spent on recognised breaks.
    pub break_hours: Decimal,
    /// Regular pay plus overtime pay at the overtime multiplier.
    pub estimated_pay: Decimal,
}

/// The reconstructed figures for a single day, kept for audit views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyHours {
    /// The calendar day.
    pub date: NaiveDate,
    /// The clock-in the shift was anchored on.
    pub clock_in: Option<NaiveDateTime>,
    /// The clock-out the shift was closed by.
    pub clock_out: Option<NaiveDateTime>,
    /// Worked seconds net of breaks.
    pub worked_seconds: i64,
    /// Break seconds inside the shift.
    pub break_seconds: i64,
    /// Whether the day had no complete clock-in/clock-out pair.
    pub is_open: bool,
    /// Number of punches recorded that day.
    pub punch_count: usize,
}

/// A weekly summary together with the context it was computed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyReport {
    /// The employee the report is for.
    pub employee_id: String,
    /// The business whose rate was applied.
    pub business_id: String,
    /// The period covered.
    pub period: PayPeriod,
    /// The hourly rate applied.
    pub pay_rate: Decimal,
    /// The aggregated figures.
    pub summary: WeeklySummary,
    /// Per-day breakdown, only for days that had punches.
    pub days: Vec<DailyHours>,
}
