// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Registry bridge for scripting hosts.
//!
//! A host drives the [`ModuleRegistry`](crate::modules::ModuleRegistry) through
//! [`RegistryProxy`], handing over configuration as [`HostValue`]s (or any other
//! [`HostConfig`] type, such as a parsed YAML node).
//!
//! # Example
//! ```
//! use dagwood_modules::bridge::{HostValue, RegistryProxy};
//! use dagwood_modules::modules::{register_builtin_modules, ModuleRegistry};
//!
//! let registry = ModuleRegistry::new();
//! register_builtin_modules(&registry).unwrap();
//! let proxy = RegistryProxy::new(&registry);
//!
//! let config = HostValue::Dict(vec![(HostValue::Str("count".into()), HostValue::Int(4))]);
//! let source = proxy.find_module("SourceModule", None, "numbers", &config).unwrap();
//! assert_eq!(source.name(), "numbers");
//! ```

mod host_value;
mod proxy;

pub use host_value::{HostConfig, HostValue};
pub use proxy::RegistryProxy;
