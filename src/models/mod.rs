//! Core data models for the Time & Attendance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod pay_period;
mod punch;
mod shift;
mod status;
mod summary;
mod timesheet;

pub use pay_period::{PERIOD_DAYS, PayPeriod};
pub use punch::{NewPunch, PunchEvent, PunchType};
pub use shift::{Break, Shift};
pub use status::{EmployeeStatus, PunchStatus};
pub use summary::{DailyHours, WeeklyReport, WeeklySummary};
pub use timesheet::{Timesheet, TimesheetStatus};
