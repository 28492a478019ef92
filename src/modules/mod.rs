// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Segment modules and the registry that makes them discoverable.
//!
//! A module author implements [`SegmentModule`] and registers a
//! [`ModuleConstructor`] under a `(namespace, module_id)` pair. Graph builders look
//! the constructor up with [`ModuleRegistry::find`] and call it with a name and a
//! [`ConfigDocument`]:
//!
//! ```text
//! register(namespace, id, ctor) → find(id, namespace) → ctor(name, config) → module
//! ```

mod builtin;
mod registry;
mod segment_module;
mod version;

pub use crate::config::consts::{DEFAULT_NAMESPACE, RELEASE_VERSION};
pub use builtin::{register_builtin_modules, SimpleModule, SinkModule, SourceModule};
pub use registry::ModuleRegistry;
pub use segment_module::{constructor, ConfigDocument, ModuleConstructor, SegmentModule};
pub use version::ReleaseVersion;
