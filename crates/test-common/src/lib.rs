//! Common test utilities shared across the debpkg crates.
//!
//! This crate provides standard package metadata fixtures and the exact control file text they
//! render to, so integration tests compare against one golden copy.

pub mod constants;
pub mod fixtures;
pub mod metadata;

pub use constants::*;
pub use fixtures::{create_config_file, create_control_dir};
pub use metadata::{debpkg_metadata, empty_metadata, vcs_metadata, versioned_metadata};

// Re-export commonly used external dependencies for convenience
pub use debpkg::{PackageMetadata, PackageMetadataBuilder, VcsType};
pub use tempfile::TempDir;
