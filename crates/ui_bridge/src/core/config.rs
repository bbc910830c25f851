//! # Bridge Configuration
//!
//! Typed configuration for the bridge: logging, frame timing defaults, how the
//! combined vertex/index buffers grow, and where file dialogs start.
//!
//! Loaded from TOML or RON through the [`Config`] trait:
//!
//! ```toml
//! log_level = "info"
//! default_delta_time = 0.016666668
//! growth = "Exact"
//! initial_vertex_capacity = 0
//! initial_index_capacity = 0
//! start_directory = "/home/player/saves"
//! ```

use serde::{Serialize, Deserialize};
use std::path::PathBuf;

pub use crate::config::{Config, ConfigError};

/// Delta time used for the very first frame, before any timestamp exists
pub const DEFAULT_DELTA_TIME: f32 = 1.0 / 60.0;

/// How the combined buffers grow when a frame needs more room than they have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GrowthPolicy {
    /// Grow to exactly the required element count
    #[default]
    Exact,
    /// Grow to the next power of two at or above the required count
    Geometric,
}

impl GrowthPolicy {
    /// Capacity to allocate when `required` elements do not fit
    pub fn target_capacity(self, required: usize) -> usize {
        match self {
            Self::Exact => required,
            Self::Geometric => required.checked_next_power_of_two().unwrap_or(required),
        }
    }
}

/// # Bridge Configuration
///
/// Everything the lifecycle controller needs besides the collaborators themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Log filter for `foundation::logging::init_with_filter` (e.g. "info", "ui_bridge=trace")
    pub log_level: String,
    /// Delta time reported for the first frame, in seconds
    pub default_delta_time: f32,
    /// Growth policy of the combined vertex/index buffers
    pub growth: GrowthPolicy,
    /// Vertices reserved up front
    pub initial_vertex_capacity: usize,
    /// Indices reserved up front
    pub initial_index_capacity: usize,
    /// Directory file dialogs open in
    pub start_directory: Option<PathBuf>,
}

impl BridgeConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            default_delta_time: DEFAULT_DELTA_TIME,
            growth: GrowthPolicy::Exact,
            initial_vertex_capacity: 0,
            initial_index_capacity: 0,
            start_directory: None,
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set the first-frame delta time
    pub fn with_default_delta_time(mut self, seconds: f32) -> Self {
        self.default_delta_time = seconds;
        self
    }

    /// Set buffer growth policy
    pub fn with_growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    /// Reserve room in the combined buffers up front
    pub fn with_initial_capacity(mut self, vertices: usize, indices: usize) -> Self {
        self.initial_vertex_capacity = vertices;
        self.initial_index_capacity = indices;
        self
    }

    /// Set the directory file dialogs start in
    pub fn with_start_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.start_directory = Some(dir.into());
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.default_delta_time.is_finite() && self.default_delta_time > 0.0) {
            return Err(format!(
                "Default delta time must be a positive number of seconds, got {}",
                self.default_delta_time
            ));
        }

        if self.log_level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for BridgeConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = BridgeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.growth, GrowthPolicy::Exact);
        assert_eq!(config.default_delta_time, 1.0 / 60.0);
    }

    #[test]
    fn test_rejects_non_positive_delta() {
        let config = BridgeConfig::new().with_default_delta_time(0.0);
        assert!(config.validate().is_err());

        let config = BridgeConfig::new().with_default_delta_time(f32::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_growth_targets() {
        assert_eq!(GrowthPolicy::Exact.target_capacity(100), 100);
        assert_eq!(GrowthPolicy::Geometric.target_capacity(100), 128);
        assert_eq!(GrowthPolicy::Geometric.target_capacity(64), 64);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = BridgeConfig::new()
            .with_growth(GrowthPolicy::Geometric)
            .with_start_directory("/tmp/saves");
        let text = config.to_string_with_format("bridge.toml").unwrap();
        let parsed = BridgeConfig::from_str_with_format(&text, "bridge.toml").unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_ron_partial_file_uses_defaults() {
        let parsed = BridgeConfig::from_str_with_format("(growth: Geometric)", "bridge.ron").unwrap();
        assert_eq!(parsed.growth, GrowthPolicy::Geometric);
        assert_eq!(parsed.log_level, "info");
        assert!(parsed.start_directory.is_none());
    }

    #[test]
    fn test_unknown_extension() {
        let result = BridgeConfig::from_str_with_format("", "bridge.json");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
