//! Rendering of the Debian `control` file.
//!
//! The control file is a fixed sequence of `Label: value` lines followed by the long description
//! as continuation lines:
//!
//! ```text
//! Package: <name>
//! Version: <version>
//! Architecture: <architecture>
//! Maintainer: <maintainer> <<email>>
//! Installed-Size: <KiB>
//! Homepage: <homepage>          (only when set)
//! Vcs-<Type>: <url>             (only when a VCS type and URL are set)
//! Vcs-Browser: <url>            (only when set)
//! Description: <short description>
//!  <long description, one leading space per line>
//! ```

use std::io;

use crate::{
    config::{ControlConfig, DEFAULT_ARCHITECTURE},
    metadata::PackageMetadata,
};

/// Convert an installed size in bytes to whole kibibytes, rounding up.
///
/// Negative sizes go through the same `(bytes + 1023) / 1024` arithmetic, truncating toward zero.
#[must_use]
pub fn installed_size_kib(installed_size_bytes: i64) -> i64 {
    // Widened so `i64::MAX` does not overflow; the quotient always fits back into an i64.
    ((i128::from(installed_size_bytes) + 1023) / 1024) as i64
}

/// One line of the control file header.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Field<'a> {
    pub(crate) label: &'a str,
    pub(crate) value: String,
    pub(crate) present: bool,
}

impl<'a> Field<'a> {
    fn required(label: &'a str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            present: true,
        }
    }

    fn optional(label: &'a str, value: &str) -> Self {
        Self {
            label,
            value: value.to_string(),
            present: !value.is_empty(),
        }
    }
}

/// A control file view over package metadata.
///
#[derive(Debug, Clone, Copy)]
pub struct Control<'a> {
    metadata: &'a PackageMetadata,
    config: Option<&'a ControlConfig>,
}

impl<'a> Control<'a> {
    #[must_use]
    pub fn new(metadata: &'a PackageMetadata) -> Self {
        Self {
            metadata,
            config: None,
        }
    }

    #[must_use]
    pub fn with_config(metadata: &'a PackageMetadata, config: &'a ControlConfig) -> Self {
        Self {
            metadata,
            config: Some(config),
        }
    }

    /// The architecture that will be written: the package's own, or the configured default when
    /// the package leaves it empty.
    #[must_use]
    pub fn architecture(&self) -> &'a str {
        if !self.metadata.architecture().is_empty() {
            return self.metadata.architecture();
        }

        self.config
            .map_or(DEFAULT_ARCHITECTURE, ControlConfig::default_architecture)
    }

    /// Header fields in output order, including the ones that will be skipped.
    pub(crate) fn fields(&self, installed_size_bytes: i64) -> Vec<Field<'static>> {
        let metadata = self.metadata;
        let vcs_type = metadata.vcs_type();

        vec![
            Field::required("Package", metadata.name()),
            Field::required("Version", metadata.version().to_string()),
            Field::required("Architecture", self.architecture()),
            Field::required(
                "Maintainer",
                format!("{} <{}>", metadata.maintainer(), metadata.maintainer_email()),
            ),
            Field::required(
                "Installed-Size",
                installed_size_kib(installed_size_bytes).to_string(),
            ),
            Field::optional("Homepage", metadata.homepage()),
            Field {
                label: vcs_type.field_name().unwrap_or("Vcs"),
                value: metadata.vcs_url().to_string(),
                present: vcs_type.is_set() && !metadata.vcs_url().is_empty(),
            },
            Field::optional("Vcs-Browser", metadata.vcs_browser()),
            Field::required("Description", metadata.short_description()),
        ]
    }

    /// Render the complete control file text.
    ///
    /// Every header line ends with a newline. The long description, when present, follows with a
    /// single space prepended to each of its lines and is otherwise copied verbatim, so a
    /// description without a trailing newline yields a control file without one.
    #[must_use]
    pub fn render(&self, installed_size_bytes: i64) -> String {
        let mut out = String::new();

        for field in self.fields(installed_size_bytes) {
            if !field.present {
                tracing::trace!(label = field.label, "skipping empty control field");
                continue;
            }
            out.push_str(field.label);
            out.push_str(": ");
            out.push_str(&field.value);
            out.push('\n');
        }

        let mut description_lines = 0usize;
        for line in self.metadata.description().split_inclusive('\n') {
            out.push(' ');
            out.push_str(line);
            description_lines += 1;
        }

        tracing::debug!(
            package = self.metadata.name(),
            version = %self.metadata.version(),
            architecture = self.architecture(),
            installed_size_kib = installed_size_kib(installed_size_bytes),
            description_lines,
            "rendered control file",
        );

        out
    }

    /// Render and write the control file text to `writer`.
    pub fn write_to<W: io::Write>(
        &self,
        installed_size_bytes: i64,
        writer: &mut W,
    ) -> io::Result<()> {
        writer.write_all(self.render(installed_size_bytes).as_bytes())
    }
}
