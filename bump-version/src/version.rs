//! Semantic versions and bump kinds

use std::fmt;
use std::str::FromStr;

use crate::error::BumpError;

/// Which component of the version to increment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BumpKind {
    #[default]
    Patch,
    Minor,
    Major,
}

impl BumpKind {
    pub const ALL: [BumpKind; 3] = [BumpKind::Patch, BumpKind::Minor, BumpKind::Major];

    pub fn as_str(&self) -> &'static str {
        match self {
            BumpKind::Patch => "patch",
            BumpKind::Minor => "minor",
            BumpKind::Major => "major",
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BumpKind {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BumpKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| BumpError::InvalidBumpKind(s.to_string()))
    }
}

/// A `major.minor.patch` version
///
/// Ordering compares major, then minor, then patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// The next version for the given kind; lower components reset to zero
    ///
    /// Fails when the incremented component would overflow.
    pub fn bump(&self, kind: BumpKind) -> Result<Version, BumpError> {
        let overflow = || BumpError::VersionOverflow {
            version: *self,
            kind,
        };

        let next = match kind {
            BumpKind::Major => {
                Version::new(self.major.checked_add(1).ok_or_else(overflow)?, 0, 0)
            }
            BumpKind::Minor => Version::new(
                self.major,
                self.minor.checked_add(1).ok_or_else(overflow)?,
                0,
            ),
            BumpKind::Patch => Version::new(
                self.major,
                self.minor,
                self.patch.checked_add(1).ok_or_else(overflow)?,
            ),
        };
        Ok(next)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BumpError::InvalidVersion(s.to_string());

        let parts = s
            .split('.')
            .map(|part| part.parse::<u64>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;

        match parts[..] {
            [major, minor, patch] => Ok(Version::new(major, minor, patch)),
            _ => Err(invalid()),
        }
    }
}
