//! Timesheet model.
//!
//! A timesheet is the persisted, approvable record of one employee's
//! aggregated hours and pay for one period.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PayPeriod, WeeklySummary};

/// Approval status of a timesheet.
///
/// `Submitted` moves to either `Approved` or `Rejected`; both are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimesheetStatus {
    /// Awaiting a manager's decision.
    Submitted,
    /// Approved by a manager.
    Approved,
    /// Rejected by a manager.
    Rejected,
}

impl TimesheetStatus {
    /// Returns true if no further transition is possible.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TimesheetStatus::Submitted)
    }

    /// Returns the wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimesheetStatus::Submitted => "submitted",
            TimesheetStatus::Approved => "approved",
            TimesheetStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for TimesheetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The persisted record of one employee's hours for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timesheet {
    /// Unique identifier for the timesheet.
    pub id: Uuid,
    /// The employee who submitted it.
    pub employee_id: String,
    /// The business the hours were worked at.
    pub business_id: String,
    /// First day of the period.
    pub period_start: NaiveDate,
    /// Last day of the period.
    pub period_end: NaiveDate,
    /// Hours up to the overtime threshold.
    pub regular_hours: Decimal,
    /// Hours beyond the overtime threshold.
    pub overtime_hours: Decimal,
    /// All worked hours.
    pub total_hours: Decimal,
    /// Hours spent on breaks.
    pub break_hours: Decimal,
    /// Hourly rate at submission time.
    pub pay_rate: Decimal,
    /// Pay computed at submission time.
    pub total_pay: Decimal,
    /// Current approval status.
    pub status: TimesheetStatus,
    /// When the timesheet was submitted.
    pub submitted_at: DateTime<Utc>,
    /// When a manager decided on the timesheet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
    /// The manager who decided on the timesheet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    /// Why the timesheet was rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

impl Timesheet {
    /// Snapshots a weekly summary into a freshly submitted timesheet.
    pub fn submitted(
        employee_id: impl Into<String>,
        business_id: impl Into<String>,
        period: PayPeriod,
        summary: &WeeklySummary,
        pay_rate: Decimal,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            employee_id: employee_id.into(),
            business_id: business_id.into(),
            period_start: period.start_date,
            period_end: period.end_date,
            regular_hours: summary.regular_hours,
            overtime_hours: summary.overtime_hours,
            total_hours: summary.total_hours,
            break_hours: summary.break_hours,
            pay_rate,
            total_pay: summary.estimated_pay,
            status: TimesheetStatus::Submitted,
            submitted_at,
            approved_at: None,
            approved_by: None,
            rejection_reason: None,
        }
    }

    /// The period the timesheet covers.
    pub fn period(&self) -> PayPeriod {
        PayPeriod {
            start_date: self.period_start,
            end_date: self.period_end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_submitted_snapshots_summary() {
        let period = PayPeriod::week_containing(NaiveDate::from_ymd_opt(2026, 1, 14).unwrap());
        let summary = WeeklySummary {
            regular_hours: dec("40"),
            overtime_hours: dec("5"),
            total_hours: dec("45"),
            break_hours: dec("2.5"),
            estimated_pay: dec("1150.00"),
        };

        let timesheet = Timesheet::submitted("emp_001", "biz_001", period, &summary, dec("25"), Utc::now());

        assert_eq!(timesheet.status, TimesheetStatus::Submitted);
        assert_eq!(timesheet.total_pay, dec("1150.00"));
        assert_eq!(timesheet.period(), period);
        assert!(timesheet.approved_by.is_none());
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!TimesheetStatus::Submitted.is_terminal());
        assert!(TimesheetStatus::Approved.is_terminal());
        assert!(TimesheetStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&TimesheetStatus::Rejected).unwrap(),
            "\"rejected\""
        );
    }
}
