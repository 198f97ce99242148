//! HTTP API module for the Time & Attendance Engine.
//!
//! This module exposes the engine's operations as REST endpoints: punch
//! recording, weekly summaries, the timesheet lifecycle, and the live
//! roster.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    ApproveRequest, DateQuery, RejectRequest, SubmitTimesheetRequest, SummaryQuery,
    TimesheetListQuery,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
