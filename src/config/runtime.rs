// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::bridge::RegistryProxy;
use crate::config::{validate_graph, GraphConfig};
use crate::errors::{ConfigError, SegmentError, ValidationError};
use crate::modules::ModuleRegistry;
use crate::segment::SegmentBuilder;

/// Assembles a segment from a graph description.
///
/// Modules are constructed through the registry bridge, so each module's YAML
/// `config` is marshalled the same way a scripting host's configuration is.
///
/// # Examples
///
/// ```
/// use dagwood_modules::config::{GraphConfig, RuntimeBuilder};
/// use dagwood_modules::modules::{register_builtin_modules, ModuleRegistry};
///
/// let registry = ModuleRegistry::new();
/// register_builtin_modules(&registry).unwrap();
///
/// let cfg: GraphConfig = serde_yaml::from_str(r#"
/// modules:
///   - {id: SourceModule, name: numbers, config: {count: 3}}
///   - {id: SinkModule, name: printer}
/// edges:
///   - {from: numbers, to: printer}
/// "#).unwrap();
///
/// let segment = RuntimeBuilder::from_config(&cfg, &registry).unwrap();
/// assert_eq!(segment.edges().len(), 1);
/// ```
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Validates `cfg`, checks its release against the registry, then constructs
    /// every module and wires every edge in declaration order.
    pub fn from_config(
        cfg: &GraphConfig,
        registry: &ModuleRegistry,
    ) -> Result<SegmentBuilder, ConfigError> {
        validate_graph(cfg).map_err(ConfigError::Invalid)?;

        let proxy = RegistryProxy::new(registry);
        if let Some(requested) = &cfg.release_version {
            if !proxy.is_version_compatible(requested) {
                return Err(ConfigError::Invalid(vec![
                    ValidationError::IncompatibleRelease {
                        requested: requested.clone(),
                    },
                ]));
            }
        }

        let mut segment = SegmentBuilder::new(cfg.segment.as_str());
        for module in &cfg.modules {
            let constructed = proxy
                .find_module(
                    &module.id,
                    Some(module.namespace.as_str()),
                    &module.name,
                    &module.config,
                )
                .map_err(SegmentError::from)?;
            segment.add_module(constructed)?;
        }
        for edge in &cfg.edges {
            segment.make_edge(edge.from.as_str(), edge.to.as_str())?;
        }

        Ok(segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::EdgeKind;
    use crate::errors::RegistryError;
    use crate::modules::register_builtin_modules;

    fn registry() -> ModuleRegistry {
        let registry = ModuleRegistry::new();
        register_builtin_modules(&registry).unwrap();
        registry
    }

    fn parse(yaml: &str) -> GraphConfig {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_from_config_wires_pipeline() {
        let cfg = parse(
            r#"
segment: ingest
release_version: [0, 1, 0]
modules:
  - id: SourceModule
    name: numbers
    config:
      count: 4
  - id: SimpleModule
    name: relay
    config:
      config_key_1: true
  - id: SinkModule
    name: printer
edges:
  - from: numbers
    to: relay
  - from: relay
    to: printer
"#,
        );

        let segment = RuntimeBuilder::from_config(&cfg, &registry()).unwrap();

        assert_eq!(segment.name(), "ingest");
        assert_eq!(
            segment.object_names().collect::<Vec<_>>(),
            vec!["numbers", "printer", "relay"]
        );
        assert!(segment.edges().iter().all(|e| e.kind == EdgeKind::Push));
        let relay = segment.module("relay").unwrap();
        assert_eq!(relay.config()["config_key_1"], serde_json::Value::Bool(true));
    }

    #[test]
    fn test_from_config_failures() {
        struct TestCase {
            name: &'static str,
            yaml: &'static str,
            check: fn(&ConfigError) -> bool,
        }

        let test_cases = vec![
            TestCase {
                name: "structural problems",
                yaml: "modules:\n  - {id: SimpleModule, name: a}\nedges:\n  - {from: a, to: a}\n",
                check: |e| matches!(e, ConfigError::Invalid(errors) if errors.len() == 1),
            },
            TestCase {
                name: "newer release",
                yaml: "release_version: [0, 2, 0]\n",
                check: |e| {
                    matches!(e, ConfigError::Invalid(errors)
                        if errors == &vec![ValidationError::IncompatibleRelease { requested: vec![0, 2, 0] }])
                },
            },
            TestCase {
                name: "malformed release",
                yaml: "release_version: [0, 1]\n",
                check: |e| matches!(e, ConfigError::Invalid(_)),
            },
            TestCase {
                name: "unknown module",
                yaml: "modules:\n  - {id: Missing, name: a}\n",
                check: |e| {
                    matches!(
                        e,
                        ConfigError::Assembly(SegmentError::Registry(
                            RegistryError::ModuleNotFound { .. }
                        ))
                    )
                },
            },
            TestCase {
                name: "module rejects config",
                yaml: "modules:\n  - {id: SourceModule, name: a}\n",
                check: |e| {
                    matches!(
                        e,
                        ConfigError::Assembly(SegmentError::Registry(
                            RegistryError::ModuleConstruction(_)
                        ))
                    )
                },
            },
            TestCase {
                name: "sink cannot feed",
                yaml: "modules:\n  - {id: SinkModule, name: a}\n  - {id: SinkModule, name: b}\nedges:\n  - {from: a, to: b}\n",
                check: |e| {
                    matches!(
                        e,
                        ConfigError::Assembly(SegmentError::IncompatibleEndpoints { .. })
                    )
                },
            },
        ];

        let registry = registry();
        for test_case in test_cases {
            let cfg = parse(test_case.yaml);
            let err = match RuntimeBuilder::from_config(&cfg, &registry) {
                Ok(_) => panic!("Test case '{}' unexpectedly succeeded", test_case.name),
                Err(err) => err,
            };
            assert!((test_case.check)(&err), "Test case '{}': {}", test_case.name, err);
        }
    }
}
