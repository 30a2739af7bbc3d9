//! # Clipping Configuration
//!
//! Tunables for the planar clipping component. Every field has a default,
//! so an empty TOML or RON file is a valid configuration.
//!
//! ```toml
//! parameter_name = "ClippingPlane"
//! unknown_shape_policy = "Hide"
//! unit_normal_tolerance = 0.001
//! log_level = "debug"
//! ```

use serde::{Serialize, Deserialize};

pub use crate::config::{Config, ConfigError};

/// Name of the material vector parameter that receives the plane `(A, B, C, D)`
pub const CLIPPING_PLANE_PARAMETER: &str = "ClippingPlane";

/// What the collision toggler does with shapes it cannot classify
///
/// Only consulted while clipping is active; an inactive component always
/// enables every shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnknownShapePolicy {
    /// Disable collision on unclassified shapes
    #[default]
    Hide,
    /// Keep unclassified shapes collidable
    Show,
}

impl UnknownShapePolicy {
    /// Visibility assigned to a shape the engine cannot classify
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Show)
    }
}

/// Planar clipping configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClippingConfig {
    /// Material vector parameter receiving the plane coefficients
    pub parameter_name: String,
    /// Policy for shapes outside {sphere, box, capsule}
    pub unknown_shape_policy: UnknownShapePolicy,
    /// Allowed deviation of an activated plane normal from unit length
    /// before a warning is logged
    pub unit_normal_tolerance: f32,
    /// Fallback log filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl ClippingConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self {
            parameter_name: CLIPPING_PLANE_PARAMETER.to_string(),
            unknown_shape_policy: UnknownShapePolicy::default(),
            unit_normal_tolerance: 1.0e-3,
            log_level: "info".to_string(),
        }
    }

    /// Set the material parameter name
    pub fn with_parameter_name(mut self, name: impl Into<String>) -> Self {
        self.parameter_name = name.into();
        self
    }

    /// Set the unknown shape policy
    pub fn with_unknown_shape_policy(mut self, policy: UnknownShapePolicy) -> Self {
        self.unknown_shape_policy = policy;
        self
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.parameter_name.trim().is_empty() {
            return Err(ConfigError::Invalid("Parameter name cannot be empty".to_string()));
        }

        if self.unit_normal_tolerance.is_nan() || self.unit_normal_tolerance < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "Unit normal tolerance must be non-negative, got {}",
                self.unit_normal_tolerance
            )));
        }

        Ok(())
    }

    /// Load and validate a configuration file
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let config = Self::load_from_file(path)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for ClippingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for ClippingConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFormat;

    #[test]
    fn test_defaults() {
        let config = ClippingConfig::default();
        assert_eq!(config.parameter_name, CLIPPING_PLANE_PARAMETER);
        assert_eq!(config.unknown_shape_policy, UnknownShapePolicy::Hide);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ClippingConfig::from_str_with_format(
            "unknown_shape_policy = \"Show\"\n",
            ConfigFormat::Toml,
        )
        .unwrap();

        assert_eq!(config.unknown_shape_policy, UnknownShapePolicy::Show);
        assert_eq!(config.parameter_name, CLIPPING_PLANE_PARAMETER);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_ron_parse() {
        let config = ClippingConfig::from_str_with_format(
            "(parameter_name: \"CutPlane\", log_level: \"trace\")",
            ConfigFormat::Ron,
        )
        .unwrap();

        assert_eq!(config.parameter_name, "CutPlane");
        assert_eq!(config.log_level, "trace");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let empty_name = ClippingConfig::new().with_parameter_name("  ");
        assert!(matches!(empty_name.validate(), Err(ConfigError::Invalid(_))));

        let mut negative = ClippingConfig::new();
        negative.unit_normal_tolerance = -1.0;
        assert!(matches!(negative.validate(), Err(ConfigError::Invalid(_))));

        let mut nan = ClippingConfig::new();
        nan.unit_normal_tolerance = f32::NAN;
        assert!(matches!(nan.validate(), Err(ConfigError::Invalid(_))));

        let mut exact = ClippingConfig::new();
        exact.unit_normal_tolerance = 0.0;
        assert!(exact.validate().is_ok());
    }

    #[test]
    fn test_unknown_shape_policy_visibility() {
        assert!(!UnknownShapePolicy::Hide.is_visible());
        assert!(UnknownShapePolicy::Show.is_visible());
    }
}
