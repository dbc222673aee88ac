//! Common test constants used across multiple test files.

/// Package name used by the full-featured fixture
pub const TEST_PACKAGE: &str = "debpkg";

/// Maintainer used by the full-featured fixture
pub const TEST_MAINTAINER: &str = "Jerry Jacobs";

/// Maintainer email used by the full-featured fixture
pub const TEST_MAINTAINER_EMAIL: &str = "foo@bar.com";

/// Homepage used by the full-featured fixture
pub const TEST_HOMEPAGE: &str = "https://github.com/xor-gate/debpkg";

/// Git URL used by the VCS fixture
pub const TEST_VCS_URL: &str = "https://github.com/xor-gate/debpkg.git";

/// Browser URL used by the VCS fixture
pub const TEST_VCS_BROWSER: &str = "https://github.com/xor-gate/debpkg";

/// Short description used by the full-featured fixture
pub const TEST_SHORT_DESCRIPTION: &str = "Golang package for creating (gpg signed) debian packages";

/// Long description as a user would supply it: no leading spaces, one blank line, no trailing
/// newline.
pub const TEST_LONG_DESCRIPTION: &str = "**Features**

* Create simple debian packages from files and folders
* Add custom control files (preinst, postinst, prerm, postrm etcetera)
* dpkg like tool with a subset of commands (--contents, --control, --extract, --info)
* Create package from debpkg.yml specfile (like packager.io without cruft)
* GPG sign package
* GPG verify package";

/// Control file for a package with nothing set but the architecture, at 0 bytes
pub const EMPTY_CONTROL: &str = "Package: 
Version: 0.0.0
Architecture: amd64
Maintainer:  <>
Installed-Size: 0
Description: 
";

/// Control file for the VCS fixture at 0 bytes
pub const VCS_CONTROL: &str = "Package: 
Version: 0.0.0
Architecture: amd64
Maintainer:  <>
Installed-Size: 0
Vcs-Git: https://github.com/xor-gate/debpkg.git
Vcs-Browser: https://github.com/xor-gate/debpkg
Description: 
";

/// Control file for the full-featured fixture at 0 bytes
pub const DEBPKG_CONTROL: &str = "Package: debpkg
Version: 0.0.0
Architecture: amd64
Maintainer: Jerry Jacobs <foo@bar.com>
Installed-Size: 0
Homepage: https://github.com/xor-gate/debpkg
Description: Golang package for creating (gpg signed) debian packages
 **Features**
 
 * Create simple debian packages from files and folders
 * Add custom control files (preinst, postinst, prerm, postrm etcetera)
 * dpkg like tool with a subset of commands (--contents, --control, --extract, --info)
 * Create package from debpkg.yml specfile (like packager.io without cruft)
 * GPG sign package
 * GPG verify package";

/// Control file text for an empty package with the given installed size in KiB
#[must_use]
pub fn empty_control_with_size(kib: i64) -> String {
    EMPTY_CONTROL.replace("Installed-Size: 0\n", &format!("Installed-Size: {kib}\n"))
}
