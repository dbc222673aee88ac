// crates/debpkg/tests/control_file_tests.rs
use debpkg::{Control, PackageMetadata, installed_size_kib};
use pretty_assertions::assert_eq;
use test_common::{
    DEBPKG_CONTROL, EMPTY_CONTROL, VCS_CONTROL, debpkg_metadata, empty_control_with_size,
    empty_metadata, vcs_metadata, versioned_metadata,
};

#[test]
fn test_control_file_empty() {
    let metadata = empty_metadata();

    assert_eq!(Control::new(&metadata).render(0), EMPTY_CONTROL);
}

#[test]
fn test_control_file_vcs_and_vcs_browser_fields() {
    let metadata = vcs_metadata();

    assert_eq!(Control::new(&metadata).render(0), VCS_CONTROL);
}

#[test]
fn test_control_file_set_version_major_minor_patch() {
    let mut metadata = versioned_metadata("foobar", 1, 2, 3);

    let expected = "Package: foobar
Version: 1.2.3
Architecture: amd64
Maintainer:  <>
Installed-Size: 0
Description: 
";
    assert_eq!(Control::new(&metadata).render(0), expected);

    // The full version string overrides the major/minor/patch components
    metadata.set_version("7.8.9");

    let expected_full_version = "Package: foobar
Version: 7.8.9
Architecture: amd64
Maintainer:  <>
Installed-Size: 0
Description: 
";
    assert_eq!(Control::new(&metadata).render(0), expected_full_version);
}

#[test]
fn test_control_file_long_description_formatting() {
    let metadata = debpkg_metadata();

    let control = Control::new(&metadata).render(0);

    assert_eq!(control, DEBPKG_CONTROL);
    assert!(!control.ends_with('\n'));
}

#[test]
fn test_control_installed_size() {
    let metadata = empty_metadata();
    let control = Control::new(&metadata);

    assert_eq!(control.render(1024), empty_control_with_size(1));
    // 1KiB + 1 byte
    assert_eq!(control.render(1025), empty_control_with_size(2));
    assert_eq!(control.render(2048), empty_control_with_size(2));
}

#[test]
fn test_control_installed_size_is_ceiling_of_kib() {
    let metadata = empty_metadata();
    let control = Control::new(&metadata);

    for bytes in [0, 1, 512, 1023, 1024, 1025, 4096, 1_048_575, 1_048_576, 1_048_577] {
        let kib = installed_size_kib(bytes);
        assert!(kib * 1024 >= bytes);
        assert!(kib == 0 || (kib - 1) * 1024 < bytes);
        assert_eq!(control.render(bytes), empty_control_with_size(kib));
    }
}

#[test]
fn test_control_never_emits_empty_architecture() {
    let metadata = PackageMetadata::default();

    assert_eq!(Control::new(&metadata).render(0), EMPTY_CONTROL);
}

#[test]
fn test_control_render_twice_is_identical() {
    let metadata = debpkg_metadata();
    let control = Control::new(&metadata);

    assert_eq!(control.render(123_456), control.render(123_456));
}
