use std::fmt;

/// The version a package is published under.
///
/// A version is either spelled out in full, or assembled from numeric components at render time.
/// Once an explicit version is set it stays authoritative: later component updates do not replace
/// it.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Version {
    Explicit(String),
    Components { major: i64, minor: i64, patch: i64 },
}

impl Default for Version {
    fn default() -> Self {
        Self::Components {
            major: 0,
            minor: 0,
            patch: 0,
        }
    }
}

impl Version {
    pub(crate) fn set_explicit(&mut self, version: &str) {
        *self = Self::Explicit(version.to_string());
    }

    pub(crate) fn set_major(&mut self, value: i64) {
        if let Self::Components { major, .. } = self {
            *major = value;
        }
    }

    pub(crate) fn set_minor(&mut self, value: i64) {
        if let Self::Components { minor, .. } = self {
            *minor = value;
        }
    }

    pub(crate) fn set_patch(&mut self, value: i64) {
        if let Self::Components { patch, .. } = self {
            *patch = value;
        }
    }

    #[must_use]
    pub fn is_explicit(&self) -> bool {
        matches!(self, Self::Explicit(_))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(version) => f.write_str(version),
            Self::Components {
                major,
                minor,
                patch,
            } => write!(f, "{major}.{minor}.{patch}"),
        }
    }
}
