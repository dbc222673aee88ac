use super::{PackageMetadata, VcsType};

/// Fluent construction of [`PackageMetadata`], applying the same setters in call order.
///
#[derive(Default, Debug)]
pub struct PackageMetadataBuilder {
    metadata: PackageMetadata,
}

impl PackageMetadataBuilder {
    #[must_use]
    pub fn name(mut self, name: &str) -> Self {
        self.metadata.set_name(name);
        self
    }

    #[must_use]
    pub fn version(mut self, version: &str) -> Self {
        self.metadata.set_version(version);
        self
    }

    #[must_use]
    pub fn version_components(mut self, major: i64, minor: i64, patch: i64) -> Self {
        self.metadata.set_version_major(major);
        self.metadata.set_version_minor(minor);
        self.metadata.set_version_patch(patch);
        self
    }

    #[must_use]
    pub fn architecture(mut self, architecture: &str) -> Self {
        self.metadata.set_architecture(architecture);
        self
    }

    #[must_use]
    pub fn maintainer(mut self, name: &str, email: &str) -> Self {
        self.metadata.set_maintainer(name);
        self.metadata.set_maintainer_email(email);
        self
    }

    #[must_use]
    pub fn homepage(mut self, homepage: &str) -> Self {
        self.metadata.set_homepage(homepage);
        self
    }

    #[must_use]
    pub fn vcs(mut self, vcs_type: VcsType, url: &str) -> Self {
        self.metadata.set_vcs_type(vcs_type);
        self.metadata.set_vcs_url(url);
        self
    }

    #[must_use]
    pub fn vcs_browser(mut self, url: &str) -> Self {
        self.metadata.set_vcs_browser(url);
        self
    }

    #[must_use]
    pub fn short_description(mut self, description: &str) -> Self {
        self.metadata.set_short_description(description);
        self
    }

    #[must_use]
    pub fn description(mut self, description: &str) -> Self {
        self.metadata.set_description(description);
        self
    }

    #[must_use]
    pub fn build(self) -> PackageMetadata {
        self.metadata
    }
}
