// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for module registration, lookup, version gating and construction.

use crate::errors::MarshalError;
use crate::modules::ReleaseVersion;
use thiserror::Error;

/// Errors returned by [`ModuleRegistry`](crate::modules::ModuleRegistry) operations.
///
/// None of these are logged-and-dropped inside the registry; the caller decides
/// whether a failure is recoverable.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The `(namespace, module_id)` pair is already taken.
    #[error("module '{module_id}' is already registered in namespace '{namespace}'")]
    AlreadyRegistered { namespace: String, module_id: String },

    /// No module is registered under the `(namespace, module_id)` pair.
    #[error("module '{module_id}' is not registered in namespace '{namespace}'")]
    ModuleNotFound { namespace: String, module_id: String },

    /// The constructor (or marshalling ahead of it) failed.
    #[error(transparent)]
    ModuleConstruction(#[from] ModuleConstructionError),

    /// The module targets a release the registry cannot serve.
    #[error("module '{module_id}' declares release {candidate}, incompatible with registry release {reference}")]
    VersionIncompatible {
        module_id: String,
        candidate: ReleaseVersion,
        reference: ReleaseVersion,
    },

    /// A release version could not be parsed.
    #[error(transparent)]
    InvalidVersion(#[from] VersionError),
}

/// Failure raised by a module constructor.
#[derive(Error, Debug)]
pub enum ModuleConstructionError {
    /// A configuration value has the wrong shape or an out-of-range value.
    #[error("invalid configuration for module '{module_name}': {reason}")]
    InvalidConfig { module_name: String, reason: String },

    /// A required configuration key is absent.
    #[error("module '{module_name}' requires configuration key '{field}'")]
    MissingField { module_name: String, field: String },

    /// The host configuration could not be converted into a document.
    #[error("configuration marshalling failed")]
    Marshalling(#[from] MarshalError),
}

/// A release version given as a list of components could not be read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("release version must have exactly 3 components (major, minor, patch), got {0}")]
    WrongLength(usize),
}
