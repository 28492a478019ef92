// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::modules::ReleaseVersion;

/// Namespace used when a module is registered or looked up without one.
pub const DEFAULT_NAMESPACE: &str = "default";
/// Release the registry checks module versions against unless told otherwise.
pub const RELEASE_VERSION: ReleaseVersion = ReleaseVersion::new(0, 1, 0);
/// Segment name used when a graph description does not give one.
pub const DEFAULT_SEGMENT_NAME: &str = "main";
