// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_NAMESPACE, DEFAULT_SEGMENT_NAME};
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Graph description: the modules to construct and the edges between them.
///
/// # Fields
/// * `segment` - Name of the segment the graph is assembled into (defaults to `main`)
/// * `release_version` - Release the graph was written against, as `[major, minor, patch]` (optional)
/// * `modules` - Modules to construct, each by registry id and segment-level name
/// * `edges` - Connections between module names
///
/// # Example
/// ```yaml
/// segment: ingest
/// release_version: [0, 1, 0]
/// modules:
///   - id: SourceModule
///     name: numbers
///     config:
///       count: 10
///   - id: SinkModule
///     namespace: default
///     name: printer
/// edges:
///   - from: numbers
///     to: printer
/// ```
#[derive(Debug, Deserialize)]
pub struct GraphConfig {
    #[serde(default = "default_segment_name")]
    pub segment: String,
    #[serde(default)]
    pub release_version: Option<Vec<u32>>,
    #[serde(default)]
    pub modules: Vec<ModuleSpec>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

/// One module to construct from the registry.
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleSpec {
    /// Registry id of the module implementation.
    pub id: String,
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Name of the instance within the segment.
    pub name: String,
    /// Handed to the module constructor as its configuration document.
    #[serde(default)]
    pub config: serde_yaml::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
}

fn default_segment_name() -> String {
    DEFAULT_SEGMENT_NAME.to_string()
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

/// Load a graph description from a YAML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GraphConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: GraphConfig = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Load a graph description and check its structure.
///
/// Every validation problem is reported at once in [`ConfigError::Invalid`].
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<GraphConfig, ConfigError> {
    let cfg = load_config(path)?;
    crate::config::validate_graph(&cfg).map_err(ConfigError::Invalid)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(yaml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
segment: ingest
release_version: [0, 1, 0]
modules:
  - id: SourceModule
    name: numbers
    config:
      count: 10
  - id: SinkModule
    namespace: custom
    name: printer
edges:
  - from: numbers
    to: printer
"#;
        let cfg: GraphConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(cfg.segment, "ingest");
        assert_eq!(cfg.release_version, Some(vec![0, 1, 0]));
        assert_eq!(cfg.modules.len(), 2);
        assert_eq!(cfg.modules[0].namespace, "default");
        assert_eq!(cfg.modules[0].config["count"].as_u64(), Some(10));
        assert_eq!(cfg.modules[1].namespace, "custom");
        assert!(cfg.modules[1].config.is_null());
        assert_eq!(
            cfg.edges,
            vec![EdgeSpec {
                from: "numbers".to_string(),
                to: "printer".to_string(),
            }]
        );
    }

    #[test]
    fn parse_defaults() {
        let cfg: GraphConfig = serde_yaml::from_str("{}").unwrap();

        assert_eq!(cfg.segment, "main");
        assert!(cfg.release_version.is_none());
        assert!(cfg.modules.is_empty());
        assert!(cfg.edges.is_empty());
    }

    #[test]
    fn load_config_from_file() {
        let file = write_config(
            r#"
modules:
  - id: SimpleModule
    name: relay
"#,
        );

        let cfg = load_config(file.path()).unwrap();

        assert_eq!(cfg.modules[0].id, "SimpleModule");
    }

    #[test]
    fn load_config_errors() {
        let missing = load_config("/nonexistent/graph.yaml");
        assert!(matches!(missing, Err(ConfigError::Io(_))));

        let file = write_config("modules:\n  - id: [unterminated\n");
        assert!(matches!(load_config(file.path()), Err(ConfigError::Yaml(_))));

        let no_name = write_config("modules:\n  - id: SimpleModule\n");
        assert!(matches!(load_config(no_name.path()), Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn load_and_validate_reports_all_problems() {
        let file = write_config(
            r#"
modules:
  - id: SimpleModule
    name: relay
  - id: SinkModule
    name: relay
edges:
  - from: relay
    to: nowhere
"#,
        );

        let err = load_and_validate_config(file.path()).unwrap_err();

        match err {
            ConfigError::Invalid(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation failure, got {other}"),
        }
    }
}
