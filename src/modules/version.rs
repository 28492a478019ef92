// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::VersionError;
use std::fmt;

/// A `(major, minor, patch)` release version.
///
/// Ordering is lexicographic over the three components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReleaseVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ReleaseVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Whether a module built against `self` can be served by a registry at `reference`.
    ///
    /// The major versions must match and `self` must not be newer than `reference`.
    ///
    /// ```
    /// use dagwood_modules::modules::ReleaseVersion;
    ///
    /// let reference = ReleaseVersion::new(2, 3, 1);
    /// assert!(ReleaseVersion::new(2, 1, 9).is_compatible_with(&reference));
    /// assert!(!ReleaseVersion::new(2, 4, 0).is_compatible_with(&reference));
    /// assert!(!ReleaseVersion::new(3, 0, 0).is_compatible_with(&reference));
    /// ```
    pub fn is_compatible_with(&self, reference: &ReleaseVersion) -> bool {
        self.major == reference.major
            && (self.minor, self.patch) <= (reference.minor, reference.patch)
    }

    /// `[major, minor, patch]`, the form hosts pass versions in.
    pub fn to_list(&self) -> [u32; 3] {
        [self.major, self.minor, self.patch]
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl TryFrom<&[u32]> for ReleaseVersion {
    type Error = VersionError;

    fn try_from(components: &[u32]) -> Result<Self, Self::Error> {
        match components {
            [major, minor, patch] => Ok(Self::new(*major, *minor, *patch)),
            _ => Err(VersionError::WrongLength(components.len())),
        }
    }
}

impl From<(u32, u32, u32)> for ReleaseVersion {
    fn from((major, minor, patch): (u32, u32, u32)) -> Self {
        Self::new(major, minor, patch)
    }
}
