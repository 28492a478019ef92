// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::consts::DEFAULT_NAMESPACE;
use crate::errors::{ModuleConstructionError, RegistryError};
use crate::modules::{ModuleConstructor, ModuleRegistry, ReleaseVersion, SegmentModule};
use crate::observability::messages::registry::ModuleConstructed;
use crate::observability::messages::StructuredLog;

use super::host_value::{HostConfig, HostValue};

/// Registry operations in the shape a scripting host calls them.
///
/// The proxy only forwards: uniqueness and version rules stay in the registry.
/// Its own work is marshalling host configuration into a [`ConfigDocument`] before
/// construction, and returning constructed modules as shared handles the host can
/// keep. Omitted namespaces default to [`DEFAULT_NAMESPACE`].
///
/// [`ConfigDocument`]: crate::modules::ConfigDocument
#[derive(Debug, Clone, Copy)]
pub struct RegistryProxy<'r> {
    registry: &'r ModuleRegistry,
}

impl RegistryProxy<'static> {
    /// Proxy over the process-wide registry.
    pub fn global() -> Self {
        Self::new(ModuleRegistry::global())
    }
}

impl<'r> RegistryProxy<'r> {
    pub fn new(registry: &'r ModuleRegistry) -> Self {
        Self { registry }
    }

    pub fn contains_namespace(&self, namespace: &str) -> bool {
        self.registry.contains_namespace(namespace)
    }

    pub fn contains(&self, module_id: &str, namespace: Option<&str>) -> bool {
        self.registry
            .contains(module_id, namespace.unwrap_or(DEFAULT_NAMESPACE))
    }

    pub fn registered_modules(&self) -> BTreeMap<String, Vec<String>> {
        self.registry.registered_modules()
    }

    pub fn unregister_module(
        &self,
        module_id: &str,
        namespace: Option<&str>,
        optional: bool,
    ) -> Result<(), RegistryError> {
        self.registry
            .unregister(module_id, namespace.unwrap_or(DEFAULT_NAMESPACE), optional)
    }

    /// Hosts pass versions as lists; anything but `[major, minor, patch]` is
    /// incompatible.
    pub fn is_version_compatible(&self, release_version: &[u32]) -> bool {
        ReleaseVersion::try_from(release_version)
            .map(|version| self.registry.is_version_compatible(&version))
            .unwrap_or(false)
    }

    pub fn register_module(
        &self,
        module_id: &str,
        namespace: Option<&str>,
        release_version: &[u32],
        constructor: ModuleConstructor,
    ) -> Result<(), RegistryError> {
        let release_version = ReleaseVersion::try_from(release_version)?;
        self.registry.register_versioned(
            namespace.unwrap_or(DEFAULT_NAMESPACE),
            module_id,
            release_version,
            constructor,
        )
    }

    /// Marshals `config`, looks the module up and constructs it as `module_name`.
    pub fn find_module<C>(
        &self,
        module_id: &str,
        namespace: Option<&str>,
        module_name: &str,
        config: &C,
    ) -> Result<Arc<dyn SegmentModule>, RegistryError>
    where
        C: HostConfig + ?Sized,
    {
        let namespace = namespace.unwrap_or(DEFAULT_NAMESPACE);
        let document = config
            .to_document()
            .map_err(ModuleConstructionError::from)?;
        let constructor = self.registry.find(module_id, namespace)?;
        let module: Arc<dyn SegmentModule> =
            Arc::from(constructor(module_name.to_string(), document)?);

        ModuleConstructed {
            module_id,
            namespace,
            module_name,
        }
        .log();

        Ok(module)
    }

    /// The module's configuration, converted back into host form.
    pub fn module_config(module: &dyn SegmentModule) -> HostValue {
        HostValue::from_document(module.config())
    }
}
