//! Error types for the Time & Attendance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while recording punches and
//! driving the timesheet lifecycle.
//!
//! Incomplete punch sequences (open shifts, unmatched breaks) are never
//! errors; they degrade to zero hours during aggregation.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::models::TimesheetStatus;

/// The main error type for the Time & Attendance Engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A timesheet already exists for the employee and period.
    #[error(
        "Timesheet already submitted for employee '{employee_id}' for period {period_start} to {period_end}"
    )]
    DuplicateSubmission {
        /// The employee whose period is already submitted.
        employee_id: String,
        /// First day of the period.
        period_start: NaiveDate,
        /// Last day of the period.
        period_end: NaiveDate,
    },

    /// Approve or reject was attempted on a timesheet that is no longer `submitted`.
    #[error("Cannot {action} timesheet {timesheet_id}: status is {status}")]
    InvalidTransition {
        /// The timesheet the transition was attempted on.
        timesheet_id: Uuid,
        /// The status the timesheet is currently in.
        status: TimesheetStatus,
        /// The attempted action ("approve" or "reject").
        action: &'static str,
    },

    /// The approver is the employee who owns the timesheet.
    #[error("Employee '{approver_id}' cannot approve or reject their own timesheet {timesheet_id}")]
    SelfApproval {
        /// The timesheet in question.
        timesheet_id: Uuid,
        /// The approver, who is also the timesheet's employee.
        approver_id: String,
    },

    /// A rejection was attempted without a reason.
    #[error("Rejecting timesheet {timesheet_id} requires a reason")]
    MissingReason {
        /// The timesheet that was being rejected.
        timesheet_id: Uuid,
    },

    /// No timesheet exists with the given id.
    #[error("Timesheet not found: {timesheet_id}")]
    TimesheetNotFound {
        /// The id that was looked up.
        timesheet_id: Uuid,
    },

    /// A punch was malformed.
    #[error("Invalid punch field '{field}': {message}")]
    InvalidPunch {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A period's boundaries were inconsistent.
    #[error("Invalid period {period_start} to {period_end}: {message}")]
    InvalidPeriod {
        /// First day of the period.
        period_start: NaiveDate,
        /// Last day of the period.
        period_end: NaiveDate,
        /// A description of the problem.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The storage layer failed; callers may retry.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
