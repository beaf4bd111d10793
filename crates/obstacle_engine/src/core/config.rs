//! # Service Configuration
//!
//! Configuration for the obstacle service: logging verbosity and the
//! tunable registry policies.
//!
//! Configurations are serializable and load from TOML or RON through the
//! [`Config`] trait.

use serde::{Serialize, Deserialize};

pub use crate::config::{Config, ConfigError};

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// # Registry Configuration
///
/// Policies applied by the polyhedron and collision list registries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Reject triangles referencing vertices that were not appended yet
    /// when the triangle is added, instead of at finalization
    pub validate_triangle_indices: bool,
    /// Capacity hint for the name-keyed registries
    pub expected_polyhedra: usize,
}

impl RegistryConfig {
    /// Create a registry configuration with defaults
    pub fn new() -> Self {
        Self {
            validate_triangle_indices: true,
            expected_polyhedra: 64,
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Service Configuration
///
/// Top-level configuration handed to [`crate::ObstacleService`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,
    /// Registry policies
    pub registry: RegistryConfig,
}

impl ServiceConfig {
    /// Create a new service configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            registry: RegistryConfig::default(),
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable or disable eager triangle index validation
    pub fn with_eager_validation(mut self, enabled: bool) -> Self {
        self.registry.validate_triangle_indices = enabled;
        self
    }

    /// Set the registry capacity hint
    pub fn with_expected_polyhedra(mut self, count: usize) -> Self {
        self.registry.expected_polyhedra = count;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_level.is_empty() {
            return Err(ConfigError::Invalid("Log level cannot be empty".to_string()));
        }

        let level = self.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Invalid(format!("Unknown log level: {}", self.log_level)));
        }

        Ok(())
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for ServiceConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ServiceConfig::default();

        assert_eq!(config.log_level, "info");
        assert!(config.registry.validate_triangle_indices);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_log_level() {
        let config = ServiceConfig::new().with_log_level("chatty");
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = ServiceConfig::new().with_log_level("");
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = ServiceConfig::new().with_log_level("DEBUG");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_partial_document() {
        let config: ServiceConfig = toml::from_str(
            "log_level = \"debug\"\n[registry]\nvalidate_triangle_indices = false\n",
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert!(!config.registry.validate_triangle_indices);
        assert_eq!(config.registry.expected_polyhedra, 64);
    }

    #[test]
    fn test_format_from_extension() {
        use crate::config::ConfigFormat;
        use std::path::Path;

        assert_eq!(ConfigFormat::from_path(Path::new("a/service.toml")).unwrap(), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("service.ron")).unwrap(), ConfigFormat::Ron);
        assert!(ConfigFormat::from_path(Path::new("service")).is_err());

        let rendered = ConfigFormat::Toml.render(&ServiceConfig::default()).unwrap();
        let parsed: ServiceConfig = ConfigFormat::Toml.parse(&rendered).unwrap();
        assert_eq!(parsed, ServiceConfig::default());
    }

    #[test]
    fn test_file_roundtrip_and_unsupported_format() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("obstacle_service_{}.ron", std::process::id()));

        let config = ServiceConfig::new()
            .with_log_level("warn")
            .with_expected_polyhedra(8);
        config.save_to_file(&path).unwrap();
        let loaded = ServiceConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
        assert!(matches!(
            config.save_to_file("service.json"),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }
}
