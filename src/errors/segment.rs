// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::edge::RoleSet;
use crate::errors::RegistryError;
use thiserror::Error;

/// Errors raised while assembling a segment.
#[derive(Error, Debug)]
pub enum SegmentError {
    #[error("segment '{segment}' already contains an object named '{name}'")]
    DuplicateObject { segment: String, name: String },

    #[error("segment '{segment}' has no object named '{name}'")]
    UnknownObject { segment: String, name: String },

    #[error("cannot connect '{source_name}' ({source_roles}) to '{sink_name}' ({sink_roles})")]
    IncompatibleEndpoints {
        source_name: String,
        source_roles: RoleSet,
        sink_name: String,
        sink_roles: RoleSet,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Errors raised by an endpoint while moving a value across an edge.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EdgeError {
    #[error("edge is closed")]
    Closed,
}
