//! Configuration types for the engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every section is
//! optional and falls back to its default.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::{
    DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_WEEKLY_OVERTIME_THRESHOLD, OvertimePolicy,
};
use crate::directory::Membership;
use crate::notify::DEFAULT_CHANNEL_CAPACITY;

/// Overtime configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OvertimeConfig {
    /// Hours per week before overtime starts.
    pub weekly_threshold_hours: Decimal,
    /// Multiplier applied to the hourly rate for overtime hours.
    pub multiplier: Decimal,
}

impl Default for OvertimeConfig {
    fn default() -> Self {
        Self {
            weekly_threshold_hours: DEFAULT_WEEKLY_OVERTIME_THRESHOLD,
            multiplier: DEFAULT_OVERTIME_MULTIPLIER,
        }
    }
}

impl OvertimeConfig {
    /// The overtime rule this configuration describes.
    pub fn policy(&self) -> OvertimePolicy {
        OvertimePolicy {
            weekly_threshold_hours: self.weekly_threshold_hours,
            multiplier: self.multiplier,
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind the server to.
    pub host: String,
    /// Port to bind the server to.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Very verbose diagnostics.
    Trace,
    /// Derivation details.
    Debug,
    /// State changes.
    #[default]
    Info,
    /// Refused operations.
    Warn,
    /// Failures.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

/// Log configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level.
    pub level: LogLevel,
}

/// Notification channel configuration.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Events buffered per subscriber before the slowest one lags.
    pub capacity: usize,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

/// Seed data for the in-memory employee directory.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Employee memberships and their hourly rates.
    pub members: Vec<Membership>,
}

/// The complete engine configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Overtime rule.
    pub overtime: OvertimeConfig,
    /// HTTP server.
    pub server: ServerConfig,
    /// Logging.
    pub log: LogConfig,
    /// Notification channel.
    pub notifications: NotificationConfig,
    /// Employee directory seed.
    pub directory: DirectoryConfig,
}
