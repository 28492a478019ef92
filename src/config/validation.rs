// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structural validation of graph descriptions.
//!
//! Checks run before any module is constructed and accumulate, so a single
//! pass reports every problem:
//!
//! 1. **Uniqueness**: module names are unique within the segment
//! 2. **References**: every edge endpoint names a declared module
//! 3. **Self edges**: no edge starts and ends at the same module
//!
//! Role compatibility of edge endpoints is only known once modules exist, so
//! the segment checks it while wiring.

use std::collections::HashSet;

use crate::config::GraphConfig;
use crate::errors::ValidationError;

/// Validates a graph description, returning every problem found.
///
/// # Example
/// ```
/// use dagwood_modules::config::{validate_graph, GraphConfig};
///
/// let cfg: GraphConfig = serde_yaml::from_str(
///     "modules:\n  - {id: SimpleModule, name: a}\nedges:\n  - {from: a, to: b}\n",
/// )
/// .unwrap();
///
/// let errors = validate_graph(&cfg).unwrap_err();
/// assert_eq!(errors.len(), 1);
/// ```
pub fn validate_graph(config: &GraphConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(duplicate_errors) = validate_unique_module_names(config) {
        errors.extend(duplicate_errors);
    }

    if let Err(edge_errors) = validate_edges(config) {
        errors.extend(edge_errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_unique_module_names(config: &GraphConfig) -> Result<(), Vec<ValidationError>> {
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    for module in &config.modules {
        if !seen.insert(module.name.as_str()) {
            errors.push(ValidationError::DuplicateModuleName {
                name: module.name.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_edges(config: &GraphConfig) -> Result<(), Vec<ValidationError>> {
    let names: HashSet<&str> = config.modules.iter().map(|m| m.name.as_str()).collect();
    let mut errors = Vec::new();

    for (edge_index, edge) in config.edges.iter().enumerate() {
        let mut resolved = true;
        for endpoint in [&edge.from, &edge.to] {
            if !names.contains(endpoint.as_str()) {
                resolved = false;
                errors.push(ValidationError::UnresolvedEdgeEndpoint {
                    edge_index,
                    name: endpoint.clone(),
                });
            }
        }

        if resolved && edge.from == edge.to {
            errors.push(ValidationError::SelfEdge {
                edge_index,
                name: edge.from.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
