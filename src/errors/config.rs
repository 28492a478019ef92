// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use crate::errors::SegmentError;

/// Problems found in a graph description before anything is constructed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Two modules share a segment-level name.
    #[error("Duplicate module name: '{name}'")]
    DuplicateModuleName { name: String },

    /// An edge names a module that is not declared.
    #[error("Edge {edge_index} references '{name}' which does not exist")]
    UnresolvedEdgeEndpoint { edge_index: usize, name: String },

    /// An edge connects a module to itself.
    #[error("Edge {edge_index} connects '{name}' to itself")]
    SelfEdge { edge_index: usize, name: String },

    /// The graph targets a release the registry cannot serve.
    #[error("Graph targets release {requested:?}, which this registry does not support")]
    IncompatibleRelease { requested: Vec<u32> },
}

/// Errors loading a graph description or assembling it into a segment.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read graph description: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse graph description: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration validation failed:\n{}", join_errors(.0))]
    Invalid(Vec<ValidationError>),

    #[error("failed to assemble graph: {0}")]
    Assembly(#[from] SegmentError),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
