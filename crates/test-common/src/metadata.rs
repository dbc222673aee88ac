//! Package metadata helpers for tests to eliminate repetitive `PackageMetadataBuilder` usage.

use crate::constants::{
    TEST_HOMEPAGE, TEST_LONG_DESCRIPTION, TEST_MAINTAINER, TEST_MAINTAINER_EMAIL, TEST_PACKAGE,
    TEST_SHORT_DESCRIPTION, TEST_VCS_BROWSER, TEST_VCS_URL,
};
use debpkg::{PackageMetadata, PackageMetadataBuilder, VcsType};

/// Metadata with only the architecture set.
#[must_use]
pub fn empty_metadata() -> PackageMetadata {
    PackageMetadataBuilder::default()
        .architecture("amd64")
        .build()
}

/// Metadata with a Git repository and browser URL and nothing else.
#[must_use]
pub fn vcs_metadata() -> PackageMetadata {
    PackageMetadataBuilder::default()
        .architecture("amd64")
        .vcs(VcsType::Git, TEST_VCS_URL)
        .vcs_browser(TEST_VCS_BROWSER)
        .build()
}

/// Metadata named `name` whose version comes from major/minor/patch components.
#[must_use]
pub fn versioned_metadata(name: &str, major: i64, minor: i64, patch: i64) -> PackageMetadata {
    PackageMetadataBuilder::default()
        .name(name)
        .architecture("amd64")
        .version_components(major, minor, patch)
        .build()
}

/// The full-featured package: maintainer, homepage, short and long description.
#[must_use]
pub fn debpkg_metadata() -> PackageMetadata {
    PackageMetadataBuilder::default()
        .name(TEST_PACKAGE)
        .version("0.0.0")
        .maintainer(TEST_MAINTAINER, TEST_MAINTAINER_EMAIL)
        .homepage(TEST_HOMEPAGE)
        .short_description(TEST_SHORT_DESCRIPTION)
        .description(TEST_LONG_DESCRIPTION)
        .architecture("amd64")
        .build()
}
