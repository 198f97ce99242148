//! Request types for the Time & Attendance Engine API.
//!
//! Punches are posted as [`NewPunch`](crate::models::NewPunch) directly; the
//! types here cover the remaining bodies and query strings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{PayPeriod, TimesheetStatus};

/// Query string for `GET /employees/:employee_id/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryQuery {
    /// The business the hours were worked at.
    pub business_id: String,
    /// First day of the period (inclusive).
    pub period_start: NaiveDate,
    /// Last day of the period (inclusive).
    pub period_end: NaiveDate,
}

impl SummaryQuery {
    /// The validated period.
    pub fn period(&self) -> EngineResult<PayPeriod> {
        PayPeriod::new(self.period_start, self.period_end)
    }
}

/// Body of `POST /timesheets`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitTimesheetRequest {
    /// The employee submitting.
    pub employee_id: String,
    /// The business the hours were worked at.
    pub business_id: String,
    /// First day of the period (inclusive).
    pub period_start: NaiveDate,
    /// Last day of the period (inclusive).
    pub period_end: NaiveDate,
}

impl SubmitTimesheetRequest {
    /// The validated period.
    pub fn period(&self) -> EngineResult<PayPeriod> {
        PayPeriod::new(self.period_start, self.period_end)
    }
}

/// Body of `POST /timesheets/:id/approve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApproveRequest {
    /// The manager approving.
    pub approver_id: String,
}

/// Body of `POST /timesheets/:id/reject`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectRequest {
    /// The manager rejecting.
    pub approver_id: String,
    /// Why the timesheet was rejected. Required, but checked by the
    /// lifecycle so an absent reason reports `MISSING_REASON`.
    #[serde(default)]
    pub reason: String,
}

/// Query string for `GET /businesses/:business_id/timesheets`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimesheetListQuery {
    /// Only return timesheets in this status.
    #[serde(default)]
    pub status: Option<TimesheetStatus>,
}

/// Query string for the live status endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DateQuery {
    /// The day to report on; today when absent.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}
