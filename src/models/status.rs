//! Live punch status of an employee.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::PunchType;

/// Where an employee currently stands, judged by their last punch of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunchStatus {
    /// Clocked in, or back from a break.
    Working,
    /// On a break.
    OnBreak,
    /// Clocked out, or no punches today.
    ClockedOut,
}

impl PunchStatus {
    /// Returns true if the employee is on the clock (working or on break).
    pub fn is_on_shift(&self) -> bool {
        !matches!(self, PunchStatus::ClockedOut)
    }
}

impl From<PunchType> for PunchStatus {
    fn from(punch_type: PunchType) -> Self {
        match punch_type {
            PunchType::ClockIn | PunchType::BreakEnd => PunchStatus::Working,
            PunchType::BreakStart => PunchStatus::OnBreak,
            PunchType::ClockOut => PunchStatus::ClockedOut,
        }
    }
}

/// One row of the live roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeStatus {
    /// The employee.
    pub employee_id: String,
    /// Their current status.
    pub status: PunchStatus,
    /// Time of the punch the status was derived from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<NaiveDateTime>,
}
