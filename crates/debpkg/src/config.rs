use std::path::{Path, PathBuf};

use config::FileFormat;
use serde::Deserialize;
use thiserror::Error;

/// Architecture written to the control file when the package does not set one.
pub const DEFAULT_ARCHITECTURE: &str = "amd64";

/// Settings that influence how a control file is rendered
///
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ControlConfig {
    #[serde(default = "default_architecture")]
    pub(crate) default_architecture: String,
}

fn default_architecture() -> String {
    DEFAULT_ARCHITECTURE.to_string()
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            default_architecture: default_architecture(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("Configuration file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error(transparent)]
    ConfigError(#[from] ::config::ConfigError),
}

impl ControlConfig {
    #[must_use]
    pub fn default_architecture(&self) -> &str {
        &self.default_architecture
    }

    /// Load configuration from YAML text. Missing keys fall back to their defaults.
    ///
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigLoadError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(contents, FileFormat::Yaml))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Load configuration from a YAML file on disk.
    ///
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        if !path.exists() {
            return Err(ConfigLoadError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let config = config::Config::builder()
            .add_source(config::File::from(path).format(FileFormat::Yaml))
            .build()?;

        let control_config: Self = config.try_deserialize()?;
        tracing::debug!(
            path = %path.display(),
            default_architecture = control_config.default_architecture(),
            "loaded control config",
        );

        Ok(control_config)
    }
}

/// Builder pattern for `ControlConfig` testing
///
#[derive(Default, Debug)]
pub struct ControlConfigBuilder {
    default_architecture: Option<String>,
}

impl ControlConfigBuilder {
    #[must_use]
    pub fn default_architecture(mut self, architecture: &str) -> Self {
        self.default_architecture = Some(architecture.to_string());
        self
    }

    #[must_use]
    pub fn build(self) -> ControlConfig {
        ControlConfig {
            default_architecture: self
                .default_architecture
                .unwrap_or_else(default_architecture),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ControlConfig::default();
        assert_eq!(config.default_architecture(), "amd64");
    }

    #[test]
    fn test_control_config_builder() {
        let config = ControlConfigBuilder::default()
            .default_architecture("arm64")
            .build();
        assert_eq!(config.default_architecture(), "arm64");

        let config = ControlConfigBuilder::default().build();
        assert_eq!(config, ControlConfig::default());
    }

    #[test]
    fn test_from_yaml_str() {
        let yaml = r#"
            default_architecture: "i386"
        "#;

        let config = ControlConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.default_architecture(), "i386");
    }

    #[test]
    fn test_from_yaml_str_missing_key_uses_default() {
        let config = ControlConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config.default_architecture(), DEFAULT_ARCHITECTURE);
    }

    #[test]
    fn test_from_yaml_str_invalid_yaml() {
        let result = ControlConfig::from_yaml_str("default_architecture: [unclosed");
        assert!(matches!(result, Err(ConfigLoadError::ConfigError(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let path = PathBuf::from("/nonexistent/debpkg/config.yaml");

        match ControlConfig::load(&path) {
            Err(ConfigLoadError::NotFound { path: missing }) => assert_eq!(missing, path),
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }
}
