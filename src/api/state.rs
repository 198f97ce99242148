//! Application state for the Time & Attendance Engine API.

use crate::engine::AttendanceEngine;

/// Shared application state.
///
/// Wraps the engine, whose collaborators are already behind `Arc`s, so
/// cloning per request is cheap.
#[derive(Clone)]
pub struct AppState {
    engine: AttendanceEngine,
}

impl AppState {
    /// Creates a new application state around an engine.
    pub fn new(engine: AttendanceEngine) -> Self {
        Self { engine }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &AttendanceEngine {
        &self.engine
    }
}
