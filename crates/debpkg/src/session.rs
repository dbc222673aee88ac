//! A package-build session.
//!
//! The session owns the metadata of the package being built together with the running total of
//! bytes its files will occupy once installed. Dropping the session ends it; it holds no external
//! resources.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::{
    config::{ConfigLoadError, ControlConfig},
    control::{Control, installed_size_kib},
    metadata::PackageMetadata,
};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to write control file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigLoadError),
}

#[derive(Debug, Clone, Default)]
pub struct PackageSession {
    metadata: PackageMetadata,
    config: ControlConfig,
    installed_size_bytes: i64,
}

impl PackageSession {
    #[must_use]
    pub fn new(config: ControlConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Start a session configured from the YAML file at `path`.
    pub fn from_config_file(path: &Path) -> Result<Self, SessionError> {
        Ok(Self::new(ControlConfig::load(path)?))
    }

    #[must_use]
    pub fn metadata(&self) -> &PackageMetadata {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut PackageMetadata {
        &mut self.metadata
    }

    /// Replace the session's metadata wholesale, e.g. with one built by
    /// [`crate::PackageMetadataBuilder`].
    pub fn set_metadata(&mut self, metadata: PackageMetadata) {
        self.metadata = metadata;
    }

    #[must_use]
    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    /// Account for `bytes` more of installed payload, typically the size of one file added to the
    /// package.
    pub fn add_installed_size(&mut self, bytes: i64) {
        self.installed_size_bytes = self.installed_size_bytes.saturating_add(bytes);
    }

    #[must_use]
    pub fn installed_size_bytes(&self) -> i64 {
        self.installed_size_bytes
    }

    #[must_use]
    pub fn control(&self) -> Control<'_> {
        Control::with_config(&self.metadata, &self.config)
    }

    /// Render the control file for everything accounted for so far.
    #[must_use]
    pub fn render_control(&self) -> String {
        self.control().render(self.installed_size_bytes)
    }

    /// Render the control file and write it to `path`, replacing any existing file.
    pub fn write_control(&self, path: &Path) -> Result<(), SessionError> {
        fs::write(path, self.render_control()).map_err(|source| SessionError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(
            package = self.metadata.name(),
            path = %path.display(),
            installed_size_kib = installed_size_kib(self.installed_size_bytes),
            "wrote control file",
        );

        Ok(())
    }
}
