// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{load_and_validate_config, load_config, RuntimeBuilder};
use crate::edge::EdgeKind;
use crate::errors::{ConfigError, ValidationError};
use crate::modules::{register_builtin_modules, ModuleRegistry, SourceModule};
use crate::segment::EdgeRecord;

fn registry() -> ModuleRegistry {
    let registry = ModuleRegistry::new();
    register_builtin_modules(&registry).unwrap();
    registry
}

/// Test that the sample pipeline loads and assembles end to end
#[test]
fn test_ingest_pipeline_yaml() {
    let config = load_and_validate_config("configs/ingest-pipeline.yaml").unwrap();

    assert_eq!(config.segment, "ingest");
    assert_eq!(config.release_version, Some(vec![0, 1, 0]));
    assert_eq!(config.modules.len(), 3);
    assert_eq!(config.edges.len(), 2);

    let segment = RuntimeBuilder::from_config(&config, &registry()).unwrap();

    assert_eq!(
        segment.edges(),
        &[
            EdgeRecord {
                source: "numbers".to_string(),
                sink: "relay".to_string(),
                kind: EdgeKind::Push,
            },
            EdgeRecord {
                source: "relay".to_string(),
                sink: "printer".to_string(),
                kind: EdgeKind::Push,
            },
        ]
    );
    let relay = segment.module("relay").unwrap();
    assert_eq!(relay.config()["labels"], serde_json::json!(["even", "odd"]));
}

/// Test that a module may feed and be fed by several others
#[test]
fn test_fan_out_yaml() {
    let config = load_and_validate_config("configs/fan-out.yaml").unwrap();
    let segment = RuntimeBuilder::from_config(&config, &registry()).unwrap();

    assert_eq!(segment.edges().len(), 4);
    let numbers = segment.module("numbers").unwrap();
    assert_eq!(numbers.module_type(), SourceModule::MODULE_TYPE);
    assert_eq!(numbers.config()["count"], serde_json::json!(3));
}

/// Test that every structural problem in a file is reported together
#[test]
fn test_invalid_graph_yaml() {
    assert!(load_config("configs/invalid-graph.yaml").is_ok());

    let err = load_and_validate_config("configs/invalid-graph.yaml").unwrap_err();
    let ConfigError::Invalid(errors) = err else {
        panic!("expected validation errors");
    };

    assert_eq!(
        errors,
        vec![
            ValidationError::DuplicateModuleName {
                name: "relay".to_string()
            },
            ValidationError::UnresolvedEdgeEndpoint {
                edge_index: 0,
                name: "missing".to_string()
            },
            ValidationError::SelfEdge {
                edge_index: 1,
                name: "relay".to_string()
            },
        ]
    );
}

/// Test that a release newer than the registry's is refused before construction
#[test]
fn test_release_gate_yaml() {
    let config = load_and_validate_config("configs/ingest-pipeline.yaml").unwrap();
    let registry = ModuleRegistry::with_reference_version((0, 0, 9).into());
    assert!(register_builtin_modules(&registry).is_err());

    let err = RuntimeBuilder::from_config(&config, &registry).unwrap_err();

    assert!(matches!(
        err,
        ConfigError::Invalid(ref errors)
            if matches!(errors.as_slice(), [ValidationError::IncompatibleRelease { .. }])
    ));
}
