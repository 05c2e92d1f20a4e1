// ============================================================================
// Tower Configuration
// Session-wide settings for comparison, parsing and reporting
// ============================================================================

use crate::numeric::EQUALITY_TOLERANCE;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration owned by a [`crate::Session`]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TowerConfig {
    /// Absolute tolerance for floating-point equality
    pub equality_tolerance: f64,

    /// Radix used by `Session::integer` (2 to 36)
    pub default_radix: u32,

    /// Whether recoverable anomalies are fired as warnings
    /// Errors are always reported
    pub report_warnings: bool,
}

impl TowerConfig {
    /// Create a configuration with the default settings
    pub fn new() -> Self {
        Self {
            equality_tolerance: EQUALITY_TOLERANCE,
            default_radix: 10,
            report_warnings: true,
        }
    }

    /// Builder method: Set the equality tolerance
    pub fn with_equality_tolerance(mut self, tolerance: f64) -> Self {
        self.equality_tolerance = tolerance;
        self
    }

    /// Builder method: Set the default parse radix
    pub fn with_default_radix(mut self, radix: u32) -> Self {
        self.default_radix = radix;
        self
    }

    /// Builder method: Enable or disable warnings
    pub fn with_report_warnings(mut self, enabled: bool) -> Self {
        self.report_warnings = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.equality_tolerance.is_finite() || self.equality_tolerance < 0.0 {
            return Err("Equality tolerance must be a finite non-negative number".to_string());
        }

        if !(2..=36).contains(&self.default_radix) {
            return Err(format!(
                "Default radix must be between 2 and 36, got {}",
                self.default_radix
            ));
        }

        Ok(())
    }
}

impl Default for TowerConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl TowerConfig {
    /// Exact comparison
    /// - Zero tolerance: floats are equal only when identical
    pub fn strict() -> Self {
        Self::new().with_equality_tolerance(0.0)
    }

    /// Silent sentinels
    /// - Warnings are not fired, errors still are
    pub fn quiet() -> Self {
        Self::new().with_report_warnings(false)
    }

    /// Hexadecimal input
    /// - `Session::integer` parses base 16
    pub fn hexadecimal() -> Self {
        Self::new().with_default_radix(16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = TowerConfig::default();
        assert_eq!(config.equality_tolerance, 3e-15);
        assert_eq!(config.default_radix, 10);
        assert!(config.report_warnings);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = TowerConfig::new()
            .with_equality_tolerance(1e-9)
            .with_default_radix(2)
            .with_report_warnings(false);

        assert_eq!(config.equality_tolerance, 1e-9);
        assert_eq!(config.default_radix, 2);
        assert!(!config.report_warnings);
    }

    #[test]
    fn test_validation() {
        assert!(TowerConfig::new().with_default_radix(1).validate().is_err());
        assert!(TowerConfig::new().with_default_radix(37).validate().is_err());
        assert!(TowerConfig::new()
            .with_equality_tolerance(-1.0)
            .validate()
            .is_err());
        assert!(TowerConfig::new()
            .with_equality_tolerance(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_preset_configs() {
        assert_eq!(TowerConfig::strict().equality_tolerance, 0.0);
        assert!(!TowerConfig::quiet().report_warnings);
        assert_eq!(TowerConfig::hexadecimal().default_radix, 16);
        assert!(TowerConfig::strict().validate().is_ok());
    }
}
