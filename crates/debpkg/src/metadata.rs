//! Package metadata model consumed by the control file renderer.

pub mod builder;
pub mod vcs;
pub mod version;

pub use self::{
    builder::PackageMetadataBuilder,
    vcs::{UnknownVcsType, VcsType},
    version::Version,
};

/// Everything the `control` file says about a package.
///
/// Every setter touches only its own field and accepts any value as-is. The single interaction
/// between fields is the version: see [`Version`].
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageMetadata {
    pub(crate) name: String,
    pub(crate) version: Version,
    pub(crate) architecture: String,
    pub(crate) maintainer: String,
    pub(crate) maintainer_email: String,
    pub(crate) homepage: String,
    pub(crate) vcs_type: VcsType,
    pub(crate) vcs_url: String,
    pub(crate) vcs_browser: String,
    pub(crate) short_description: String,
    pub(crate) description: String,
}

impl PackageMetadata {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    #[must_use]
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Set the full version string. This wins over any major/minor/patch component, whether
    /// those were set before or after.
    pub fn set_version(&mut self, version: &str) {
        self.version.set_explicit(version);
    }

    pub fn set_version_major(&mut self, major: i64) {
        self.version.set_major(major);
    }

    pub fn set_version_minor(&mut self, minor: i64) {
        self.version.set_minor(minor);
    }

    pub fn set_version_patch(&mut self, patch: i64) {
        self.version.set_patch(patch);
    }

    /// The architecture as set, which may be empty. The renderer substitutes the configured
    /// default for an empty value.
    #[must_use]
    pub fn architecture(&self) -> &str {
        &self.architecture
    }

    pub fn set_architecture(&mut self, architecture: &str) {
        self.architecture = architecture.to_string();
    }

    #[must_use]
    pub fn maintainer(&self) -> &str {
        &self.maintainer
    }

    pub fn set_maintainer(&mut self, maintainer: &str) {
        self.maintainer = maintainer.to_string();
    }

    #[must_use]
    pub fn maintainer_email(&self) -> &str {
        &self.maintainer_email
    }

    pub fn set_maintainer_email(&mut self, email: &str) {
        self.maintainer_email = email.to_string();
    }

    #[must_use]
    pub fn homepage(&self) -> &str {
        &self.homepage
    }

    pub fn set_homepage(&mut self, homepage: &str) {
        self.homepage = homepage.to_string();
    }

    #[must_use]
    pub fn vcs_type(&self) -> VcsType {
        self.vcs_type
    }

    pub fn set_vcs_type(&mut self, vcs_type: VcsType) {
        self.vcs_type = vcs_type;
    }

    #[must_use]
    pub fn vcs_url(&self) -> &str {
        &self.vcs_url
    }

    pub fn set_vcs_url(&mut self, url: &str) {
        self.vcs_url = url.to_string();
    }

    #[must_use]
    pub fn vcs_browser(&self) -> &str {
        &self.vcs_browser
    }

    pub fn set_vcs_browser(&mut self, url: &str) {
        self.vcs_browser = url.to_string();
    }

    #[must_use]
    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    pub fn set_short_description(&mut self, description: &str) {
        self.short_description = description.to_string();
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_metadata_is_empty() {
        let metadata = PackageMetadata::default();

        assert_eq!(metadata.name(), "");
        assert_eq!(metadata.version().to_string(), "0.0.0");
        assert_eq!(metadata.architecture(), "");
        assert_eq!(metadata.maintainer(), "");
        assert_eq!(metadata.maintainer_email(), "");
        assert_eq!(metadata.homepage(), "");
        assert_eq!(metadata.vcs_type(), VcsType::Unset);
        assert_eq!(metadata.vcs_url(), "");
        assert_eq!(metadata.vcs_browser(), "");
        assert_eq!(metadata.short_description(), "");
        assert_eq!(metadata.description(), "");
    }

    #[test]
    fn test_setters_only_touch_their_own_field() {
        let mut metadata = PackageMetadata::default();
        metadata.set_maintainer("Jerry Jacobs");

        let mut expected = PackageMetadata::default();
        expected.maintainer = "Jerry Jacobs".to_string();

        assert_eq!(metadata, expected);
    }

    #[test]
    fn test_setters_are_idempotent() {
        let mut once = PackageMetadata::default();
        once.set_homepage("https://example.com");

        let mut twice = PackageMetadata::default();
        twice.set_homepage("https://example.com");
        twice.set_homepage("https://example.com");

        assert_eq!(once, twice);
    }

    #[test]
    fn test_explicit_version_set_before_components_still_wins() {
        let mut metadata = PackageMetadata::default();
        metadata.set_version("7.8.9");
        metadata.set_version_major(1);
        metadata.set_version_minor(2);
        metadata.set_version_patch(3);

        assert_eq!(metadata.version().to_string(), "7.8.9");
    }

    #[test]
    fn test_explicit_version_set_after_components_wins() {
        let mut metadata = PackageMetadata::default();
        metadata.set_version_major(1);
        metadata.set_version_minor(2);
        metadata.set_version_patch(3);
        assert_eq!(metadata.version().to_string(), "1.2.3");

        metadata.set_version("7.8.9");
        assert_eq!(metadata.version().to_string(), "7.8.9");
    }

    #[test]
    fn test_architecture_is_not_defaulted_at_set_time() {
        let mut metadata = PackageMetadata::default();
        metadata.set_architecture("");

        assert_eq!(metadata.architecture(), "");
    }
}
