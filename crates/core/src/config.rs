//! Nesting configuration.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Standard stock sheet width in millimeters.
pub const DEFAULT_SHEET_WIDTH: f64 = 2440.0;

/// Standard stock sheet height in millimeters.
pub const DEFAULT_SHEET_HEIGHT: f64 = 1220.0;

/// Objects thinner than this (in millimeters) are treated as panels.
pub const DEFAULT_THICKNESS_THRESHOLD: f64 = 50.0;

/// Configuration shared by the classifier and the nesting engine.
///
/// All lengths are in one consistent unit (millimeters by convention).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NestConfig {
    /// Stock sheet width.
    pub sheet_width: f64,

    /// Stock sheet height.
    pub sheet_height: f64,

    /// Smallest extent must be strictly below this to count as a panel.
    pub thickness_threshold: f64,

    /// Reject negative or non-finite lengths instead of processing them
    /// mechanically.
    pub validate_input: bool,
}

impl Default for NestConfig {
    fn default() -> Self {
        Self {
            sheet_width: DEFAULT_SHEET_WIDTH,
            sheet_height: DEFAULT_SHEET_HEIGHT,
            thickness_threshold: DEFAULT_THICKNESS_THRESHOLD,
            validate_input: false,
        }
    }
}

impl NestConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stock sheet dimensions.
    pub fn with_sheet_size(mut self, width: f64, height: f64) -> Self {
        self.sheet_width = width;
        self.sheet_height = height;
        self
    }

    /// Sets the panel thickness threshold.
    pub fn with_thickness_threshold(mut self, threshold: f64) -> Self {
        self.thickness_threshold = threshold;
        self
    }

    /// Enables or disables input validation.
    pub fn with_validation(mut self, enabled: bool) -> Self {
        self.validate_input = enabled;
        self
    }

    /// Checks that sheet dimensions and threshold are usable.
    pub fn validate(&self) -> Result<()> {
        if !self.sheet_width.is_finite() || self.sheet_width <= 0.0 {
            return Err(Error::InvalidSheet(format!(
                "sheet width must be positive and finite, got {}",
                self.sheet_width
            )));
        }
        if !self.sheet_height.is_finite() || self.sheet_height <= 0.0 {
            return Err(Error::InvalidSheet(format!(
                "sheet height must be positive and finite, got {}",
                self.sheet_height
            )));
        }
        if !self.thickness_threshold.is_finite() || self.thickness_threshold <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "thickness threshold must be positive and finite, got {}",
                self.thickness_threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NestConfig::default();
        assert_eq!(config.sheet_width, 2440.0);
        assert_eq!(config.sheet_height, 1220.0);
        assert_eq!(config.thickness_threshold, 50.0);
        assert!(!config.validate_input);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = NestConfig::new()
            .with_sheet_size(3050.0, 1525.0)
            .with_thickness_threshold(25.0)
            .with_validation(true);

        assert_eq!(config.sheet_width, 3050.0);
        assert_eq!(config.sheet_height, 1525.0);
        assert_eq!(config.thickness_threshold, 25.0);
        assert!(config.validate_input);
    }

    #[test]
    fn test_invalid_sheet() {
        let config = NestConfig::new().with_sheet_size(0.0, 1220.0);
        assert!(matches!(config.validate(), Err(Error::InvalidSheet(_))));

        let config = NestConfig::new().with_sheet_size(2440.0, f64::NAN);
        assert!(matches!(config.validate(), Err(Error::InvalidSheet(_))));
    }

    #[test]
    fn test_invalid_threshold() {
        let config = NestConfig::new().with_thickness_threshold(-1.0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }
}
