//! HTTP request handlers for the Time & Attendance Engine API.
//!
//! This module contains the handler functions for all API endpoints. Each
//! request is tagged with a `correlation_id` that appears on every log line
//! it produces.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::NewPunch;

use super::request::{
    ApproveRequest, DateQuery, RejectRequest, SubmitTimesheetRequest, SummaryQuery,
    TimesheetListQuery,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/punches", post(record_punch_handler))
        .route("/employees/:employee_id/summary", get(summary_handler))
        .route(
            "/employees/:employee_id/timesheets",
            get(employee_timesheets_handler),
        )
        .route("/timesheets", post(submit_timesheet_handler))
        .route("/timesheets/:id", get(get_timesheet_handler))
        .route("/timesheets/:id/approve", post(approve_handler))
        .route("/timesheets/:id/reject", post(reject_handler))
        .route(
            "/businesses/:business_id/timesheets",
            get(business_timesheets_handler),
        )
        .route("/businesses/:business_id/working", get(working_handler))
        .route("/businesses/:business_id/roster", get(roster_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request refused"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

fn json_rejection(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the bad field
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") || body_text.contains("unknown variant") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

fn query_rejection(correlation_id: Uuid, rejection: QueryRejection) -> Response {
    let body_text = rejection.body_text();
    warn!(
        correlation_id = %correlation_id,
        error = %body_text,
        "Query string rejected"
    );
    ApiErrorResponse::bad_request(ApiError::validation_error(body_text)).into_response()
}

fn path_rejection(correlation_id: Uuid, rejection: PathRejection) -> Response {
    let body_text = rejection.body_text();
    warn!(
        correlation_id = %correlation_id,
        error = %body_text,
        "Path rejected"
    );
    ApiErrorResponse::bad_request(ApiError::new("INVALID_PATH", body_text)).into_response()
}

/// Handler for GET /health.
async fn health_handler() -> Response {
    json_response(
        StatusCode::OK,
        json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }),
    )
}

/// Handler for POST /punches.
///
/// Appends the punch to the ledger and returns it with its assigned id.
async fn record_punch_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewPunch>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing punch");

    let punch = match payload {
        Ok(Json(punch)) => punch,
        Err(rejection) => return json_rejection(correlation_id, rejection),
    };

    match state.engine().record_punch(punch) {
        Ok(event) => json_response(StatusCode::CREATED, event),
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for GET /employees/:employee_id/summary.
async fn summary_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    query: Result<Query<SummaryQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return query_rejection(correlation_id, rejection),
    };
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        business_id = %query.business_id,
        "Computing weekly summary"
    );

    let result = query.period().and_then(|period| {
        state
            .engine()
            .weekly_summary(&employee_id, &query.business_id, period)
    });
    match result {
        Ok(report) => json_response(StatusCode::OK, report),
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for GET /employees/:employee_id/timesheets.
async fn employee_timesheets_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.engine().employee_timesheets(&employee_id) {
        Ok(timesheets) => json_response(StatusCode::OK, timesheets),
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for POST /timesheets.
///
/// Snapshots the employee's period into a `submitted` timesheet.
async fn submit_timesheet_handler(
    State(state): State<AppState>,
    payload: Result<Json<SubmitTimesheetRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return json_rejection(correlation_id, rejection),
    };
    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        period_start = %request.period_start,
        period_end = %request.period_end,
        "Processing timesheet submission"
    );

    let result = request.period().and_then(|period| {
        state
            .engine()
            .submit_timesheet(&request.employee_id, &request.business_id, period)
    });
    match result {
        Ok(timesheet) => json_response(StatusCode::CREATED, timesheet),
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for GET /timesheets/:id.
async fn get_timesheet_handler(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Path(id) = match id {
        Ok(id) => id,
        Err(rejection) => return path_rejection(correlation_id, rejection),
    };

    match state.engine().timesheet(id) {
        Ok(timesheet) => json_response(StatusCode::OK, timesheet),
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for POST /timesheets/:id/approve.
async fn approve_handler(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<ApproveRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Path(id) = match id {
        Ok(id) => id,
        Err(rejection) => return path_rejection(correlation_id, rejection),
    };
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return json_rejection(correlation_id, rejection),
    };
    info!(
        correlation_id = %correlation_id,
        timesheet_id = %id,
        approver_id = %request.approver_id,
        "Processing approval"
    );

    match state.engine().approve_timesheet(id, &request.approver_id) {
        Ok(timesheet) => json_response(StatusCode::OK, timesheet),
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for POST /timesheets/:id/reject.
async fn reject_handler(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<RejectRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Path(id) = match id {
        Ok(id) => id,
        Err(rejection) => return path_rejection(correlation_id, rejection),
    };
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return json_rejection(correlation_id, rejection),
    };
    info!(
        correlation_id = %correlation_id,
        timesheet_id = %id,
        approver_id = %request.approver_id,
        "Processing rejection"
    );

    match state
        .engine()
        .reject_timesheet(id, &request.approver_id, &request.reason)
    {
        Ok(timesheet) => json_response(StatusCode::OK, timesheet),
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for GET /businesses/:business_id/timesheets.
///
/// With `?status=submitted` this is the approval queue.
async fn business_timesheets_handler(
    State(state): State<AppState>,
    Path(business_id): Path<String>,
    query: Result<Query<TimesheetListQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return query_rejection(correlation_id, rejection),
    };

    match state.engine().business_timesheets(&business_id, query.status) {
        Ok(timesheets) => json_response(StatusCode::OK, timesheets),
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for GET /businesses/:business_id/working.
async fn working_handler(
    State(state): State<AppState>,
    Path(business_id): Path<String>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return query_rejection(correlation_id, rejection),
    };
    let date = query.date.unwrap_or_else(|| Local::now().date_naive());

    match state.engine().currently_working(&business_id, date) {
        Ok(statuses) => json_response(StatusCode::OK, statuses),
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for GET /businesses/:business_id/roster.
async fn roster_handler(
    State(state): State<AppState>,
    Path(business_id): Path<String>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return query_rejection(correlation_id, rejection),
    };
    let date = query.date.unwrap_or_else(|| Local::now().date_naive());

    match state.engine().roster_status(&business_id, date) {
        Ok(statuses) => json_response(StatusCode::OK, statuses),
        Err(err) => engine_error(correlation_id, err),
    }
}
