//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

/// Loads and validates the engine configuration.
///
/// # File Format
///
/// ```yaml
/// overtime:
///   weekly_threshold_hours: 40
///   multiplier: 1.5
/// server:
///   host: 0.0.0.0
///   port: 8080
/// log:
///   level: info
/// notifications:
///   capacity: 64
/// directory:
///   members:
///     - employee_id: emp_001
///       business_id: biz_001
///       pay_rate: 24.50
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/engine.yaml")?;
/// println!("Listening on port {}", loader.config().server.port);
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - The overtime settings are out of range
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content, &path_str)
    }

    /// Parses configuration from YAML text; `origin` names the source in errors.
    pub fn from_yaml(content: &str, origin: &str) -> EngineResult<Self> {
        let parse_error = |message: String| EngineError::ConfigParseError {
            path: origin.to_string(),
            message,
        };

        // An empty file is a valid, all-default configuration.
        let config: EngineConfig = if content.trim().is_empty() {
            EngineConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?
        };

        if config.overtime.weekly_threshold_hours < Decimal::ZERO {
            return Err(parse_error(
                "overtime.weekly_threshold_hours must not be negative".to_string(),
            ));
        }
        if config.overtime.multiplier < Decimal::ONE {
            return Err(parse_error(
                "overtime.multiplier must be at least 1".to_string(),
            ));
        }

        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> EngineConfig {
        self.config
    }
}
