//! Configuration loading and command-line overrides.

use anyhow::{Context, Result};
use panelnest_core::NestConfig;
use std::path::Path;

/// Loads a TOML configuration file, or the defaults when no path is given.
///
/// Missing keys fall back to their defaults.
pub fn load_config(path: Option<&Path>) -> Result<NestConfig> {
    let Some(path) = path else {
        return Ok(NestConfig::default());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: NestConfig =
        toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))?;
    log::debug!("Loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}

/// Renders a configuration as TOML.
pub fn config_to_toml(config: &NestConfig) -> Result<String> {
    toml::to_string_pretty(config).context("failed to serialize config")
}

/// Values given on the command line, applied over the loaded config.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub sheet_width: Option<f64>,
    pub sheet_height: Option<f64>,
    pub thickness_threshold: Option<f64>,
    pub strict: bool,
}

impl Overrides {
    /// Applies the overrides. `strict` only ever turns validation on.
    pub fn apply(&self, mut config: NestConfig) -> NestConfig {
        if let Some(width) = self.sheet_width {
            config.sheet_width = width;
        }
        if let Some(height) = self.sheet_height {
            config.sheet_height = height;
        }
        if let Some(threshold) = self.thickness_threshold {
            config.thickness_threshold = threshold;
        }
        if self.strict {
            config.validate_input = true;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_without_path() {
        assert_eq!(load_config(None).unwrap(), NestConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nest.toml");
        std::fs::write(&path, "sheet_width = 3050.0\nvalidate_input = true\n").unwrap();

        let config = load_config(Some(path.as_path())).unwrap();
        assert_eq!(config.sheet_width, 3050.0);
        assert_eq!(config.sheet_height, 1220.0);
        assert!(config.validate_input);
    }

    #[test]
    fn test_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nest.toml");
        std::fs::write(&path, "sheet_width = \"wide\"\n").unwrap();
        assert!(load_config(Some(path.as_path())).is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = NestConfig::new().with_thickness_threshold(25.0);
        let text = config_to_toml(&config).unwrap();
        assert!(text.contains("thickness_threshold = 25.0"));
        let parsed: NestConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_overrides() {
        let overrides = Overrides {
            sheet_width: Some(2500.0),
            thickness_threshold: Some(30.0),
            strict: true,
            ..Default::default()
        };
        let config = overrides.apply(NestConfig::default());
        assert_eq!(config.sheet_width, 2500.0);
        assert_eq!(config.sheet_height, 1220.0);
        assert_eq!(config.thickness_threshold, 30.0);
        assert!(config.validate_input);
    }
}
