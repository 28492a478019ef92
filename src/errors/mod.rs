// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod bridge;
mod config;
mod registry;
mod segment;

pub use bridge::MarshalError;
pub use config::{ConfigError, ValidationError};
pub use registry::{ModuleConstructionError, RegistryError, VersionError};
pub use segment::{EdgeError, SegmentError};
