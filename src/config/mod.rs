//! Configuration loading and management for the Time & Attendance Engine.
//!
//! This module loads the engine configuration from a YAML file: the
//! overtime rule, server binding, log level, notification buffering, and the
//! seed for the in-memory employee directory.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/engine.yaml").unwrap();
//! println!("Overtime after {} hours", config.config().overtime.weekly_threshold_hours);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DirectoryConfig, EngineConfig, LogConfig, LogLevel, NotificationConfig, OvertimeConfig,
    ServerConfig,
};
