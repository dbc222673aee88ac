use std::{fmt, str::FromStr};

use thiserror::Error;

/// Version control systems a `Vcs-*` control field can name.
///
/// `Unset` means no VCS field is emitted at all.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VcsType {
    #[default]
    Unset,
    Arch,
    Bzr,
    Cvs,
    Darcs,
    Git,
    Hg,
    Mtn,
    Svn,
}

impl VcsType {
    /// Control field label for this VCS, e.g. `Vcs-Git`.
    #[must_use]
    pub fn field_name(self) -> Option<&'static str> {
        match self {
            Self::Unset => None,
            Self::Arch => Some("Vcs-Arch"),
            Self::Bzr => Some("Vcs-Bzr"),
            Self::Cvs => Some("Vcs-Cvs"),
            Self::Darcs => Some("Vcs-Darcs"),
            Self::Git => Some("Vcs-Git"),
            Self::Hg => Some("Vcs-Hg"),
            Self::Mtn => Some("Vcs-Mtn"),
            Self::Svn => Some("Vcs-Svn"),
        }
    }

    #[must_use]
    pub fn is_set(self) -> bool {
        self != Self::Unset
    }
}

impl fmt::Display for VcsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => f.write_str("unset"),
            Self::Arch => f.write_str("Arch"),
            Self::Bzr => f.write_str("Bzr"),
            Self::Cvs => f.write_str("Cvs"),
            Self::Darcs => f.write_str("Darcs"),
            Self::Git => f.write_str("Git"),
            Self::Hg => f.write_str("Hg"),
            Self::Mtn => f.write_str("Mtn"),
            Self::Svn => f.write_str("Svn"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown VCS type `{0}`, expected one of: arch, bzr, cvs, darcs, git, hg, mtn, svn")]
pub struct UnknownVcsType(pub String);

impl FromStr for VcsType {
    type Err = UnknownVcsType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "" | "unset" => Ok(Self::Unset),
            "arch" => Ok(Self::Arch),
            "bzr" => Ok(Self::Bzr),
            "cvs" => Ok(Self::Cvs),
            "darcs" => Ok(Self::Darcs),
            "git" => Ok(Self::Git),
            "hg" => Ok(Self::Hg),
            "mtn" => Ok(Self::Mtn),
            "svn" => Ok(Self::Svn),
            _ => Err(UnknownVcsType(s.to_string())),
        }
    }
}
