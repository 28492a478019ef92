// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Modules that ship with the crate and are registered in the default namespace.
//!
//! * `SimpleModule` - relay that accepts pushed values and pushes them on.
//! * `SourceModule` - emits a configured number of values.
//! * `SinkModule` - terminal acceptor.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::config::consts::{DEFAULT_NAMESPACE, RELEASE_VERSION};
use crate::edge::{Role, RoleSet};
use crate::errors::{ModuleConstructionError, RegistryError};
use crate::segment::{ObjectProperties, SegmentObject};

use super::registry::ModuleRegistry;
use super::segment_module::{constructor, ConfigDocument, SegmentModule};

const INPUT_PORT: &str = "input_0";
const OUTPUT_PORT: &str = "output_0";

/// Registers the built-in modules under [`DEFAULT_NAMESPACE`].
pub fn register_builtin_modules(registry: &ModuleRegistry) -> Result<(), RegistryError> {
    registry.register_versioned(
        DEFAULT_NAMESPACE,
        SimpleModule::MODULE_TYPE,
        RELEASE_VERSION,
        constructor(|name, config| Ok(Box::new(SimpleModule::new(name, config)?))),
    )?;
    registry.register_versioned(
        DEFAULT_NAMESPACE,
        SourceModule::MODULE_TYPE,
        RELEASE_VERSION,
        constructor(|name, config| Ok(Box::new(SourceModule::new(name, config)?))),
    )?;
    registry.register_versioned(
        DEFAULT_NAMESPACE,
        SinkModule::MODULE_TYPE,
        RELEASE_VERSION,
        constructor(|name, config| Ok(Box::new(SinkModule::new(name, config)?))),
    )?;
    Ok(())
}

/// Accepts `null` or a mapping; anything else is rejected.
fn config_mapping<'a>(
    module_name: &str,
    config: &'a ConfigDocument,
) -> Result<Option<&'a Map<String, Value>>, ModuleConstructionError> {
    match config {
        Value::Null => Ok(None),
        Value::Object(map) => Ok(Some(map)),
        other => Err(ModuleConstructionError::InvalidConfig {
            module_name: module_name.to_string(),
            reason: format!("expected a mapping, got {}", value_kind(other)),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

fn properties(name: &str, module_type: &str, roles: &[Role]) -> Arc<ObjectProperties> {
    Arc::new(ObjectProperties::new(
        name,
        module_type,
        roles.iter().copied().collect::<RoleSet>(),
    ))
}

/// Relay module: accepts pushed values and pushes them on unchanged.
#[derive(Debug)]
pub struct SimpleModule {
    properties: Arc<ObjectProperties>,
    config: ConfigDocument,
}

impl SimpleModule {
    pub const MODULE_TYPE: &'static str = "SimpleModule";

    pub fn new(name: String, config: ConfigDocument) -> Result<Self, ModuleConstructionError> {
        config_mapping(&name, &config)?;
        Ok(Self {
            properties: properties(
                &name,
                Self::MODULE_TYPE,
                &[Role::WritableAcceptor, Role::WritableProvider],
            ),
            config,
        })
    }
}

impl SegmentObject for SimpleModule {
    fn properties(&self) -> Arc<ObjectProperties> {
        Arc::clone(&self.properties)
    }
}

impl SegmentModule for SimpleModule {
    fn name(&self) -> &str {
        self.properties.name()
    }

    fn module_type(&self) -> &'static str {
        Self::MODULE_TYPE
    }

    fn config(&self) -> &ConfigDocument {
        &self.config
    }

    fn input_ports(&self) -> Vec<String> {
        vec![INPUT_PORT.to_string()]
    }

    fn output_ports(&self) -> Vec<String> {
        vec![OUTPUT_PORT.to_string()]
    }
}

/// Source module emitting `count` values.
///
/// Requires an unsigned integer `count` in its configuration.
#[derive(Debug)]
pub struct SourceModule {
    properties: Arc<ObjectProperties>,
    config: ConfigDocument,
    count: u64,
}

impl SourceModule {
    pub const MODULE_TYPE: &'static str = "SourceModule";

    pub fn new(name: String, config: ConfigDocument) -> Result<Self, ModuleConstructionError> {
        let count = config_mapping(&name, &config)?
            .and_then(|map| map.get("count"))
            .ok_or_else(|| ModuleConstructionError::MissingField {
                module_name: name.clone(),
                field: "count".to_string(),
            })?;
        let count = count
            .as_u64()
            .ok_or_else(|| ModuleConstructionError::InvalidConfig {
                module_name: name.clone(),
                reason: format!("'count' must be an unsigned integer, got {}", value_kind(count)),
            })?;

        Ok(Self {
            properties: properties(&name, Self::MODULE_TYPE, &[Role::WritableProvider]),
            config,
            count,
        })
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

impl SegmentObject for SourceModule {
    fn properties(&self) -> Arc<ObjectProperties> {
        Arc::clone(&self.properties)
    }
}

impl SegmentModule for SourceModule {
    fn name(&self) -> &str {
        self.properties.name()
    }

    fn module_type(&self) -> &'static str {
        Self::MODULE_TYPE
    }

    fn config(&self) -> &ConfigDocument {
        &self.config
    }

    fn input_ports(&self) -> Vec<String> {
        Vec::new()
    }

    fn output_ports(&self) -> Vec<String> {
        vec![OUTPUT_PORT.to_string()]
    }
}

/// Terminal module accepting pushed values.
#[derive(Debug)]
pub struct SinkModule {
    properties: Arc<ObjectProperties>,
    config: ConfigDocument,
}

impl SinkModule {
    pub const MODULE_TYPE: &'static str = "SinkModule";

    pub fn new(name: String, config: ConfigDocument) -> Result<Self, ModuleConstructionError> {
        config_mapping(&name, &config)?;
        Ok(Self {
            properties: properties(&name, Self::MODULE_TYPE, &[Role::WritableAcceptor]),
            config,
        })
    }
}

impl SegmentObject for SinkModule {
    fn properties(&self) -> Arc<ObjectProperties> {
        Arc::clone(&self.properties)
    }
}

impl SegmentModule for SinkModule {
    fn name(&self) -> &str {
        self.properties.name()
    }

    fn module_type(&self) -> &'static str {
        Self::MODULE_TYPE
    }

    fn config(&self) -> &ConfigDocument {
        &self.config
    }

    fn input_ports(&self) -> Vec<String> {
        vec![INPUT_PORT.to_string()]
    }

    fn output_ports(&self) -> Vec<String> {
        Vec::new()
    }
}
