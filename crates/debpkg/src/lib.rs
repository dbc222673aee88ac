//! debpkg - Debian package control file generation
//!
//! The `debpkg` library turns an in-memory description of a package into the exact text of the
//! `control` member of a Debian binary package. Archive assembly, signing and walking the file
//! system to compute sizes are left to the caller; this crate only needs the package metadata and
//! the number of bytes the package will occupy once installed.
//!
//! # Main Components
//!
//! - [`metadata`] - The package metadata model, its version and VCS types, and a builder
//! - [`control`] - Rendering of the control file text
//! - [`session`] - A package-build session that owns metadata and accumulates installed size
//! - [`config`] - Render configuration (default architecture)
//!
//! # Examples
//!
//! ```
//! use debpkg::{control::Control, metadata::PackageMetadata};
//!
//! let mut metadata = PackageMetadata::default();
//! metadata.set_name("hello");
//! metadata.set_version("2.10-3");
//!
//! let text = Control::new(&metadata).render(4096);
//! assert!(text.starts_with("Package: hello\nVersion: 2.10-3\nArchitecture: amd64\n"));
//! ```

pub mod config;
pub mod control;
pub mod metadata;
pub mod session;

pub use control::{Control, installed_size_kib};
pub use metadata::{PackageMetadata, PackageMetadataBuilder, VcsType, Version};
pub use session::PackageSession;
