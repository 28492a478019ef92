// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::consts::RELEASE_VERSION;
use crate::errors::RegistryError;
use crate::observability::messages::registry::{
    ModuleRegistered, ModuleUnregistered, RegistrationRejected,
};
use crate::observability::messages::StructuredLog;

use super::segment_module::ModuleConstructor;
use super::version::ReleaseVersion;

type NamespaceMap = BTreeMap<String, BTreeMap<String, ModuleConstructor>>;

/// Catalog of module constructors keyed by `(namespace, module_id)`.
///
/// Each key is either absent or registered; registering a present key is an
/// error, never an overwrite. A single reader/writer lock guards the map. The
/// registry only hands constructors out, so module construction never happens
/// under the lock.
///
/// The registry is an ordinary value: build one with [`ModuleRegistry::new`] and
/// share it by reference, or use the lazily initialised process-wide instance
/// from [`ModuleRegistry::global`].
///
/// # Example
/// ```
/// use dagwood_modules::modules::{constructor, ModuleRegistry, SegmentModule, SimpleModule};
///
/// let registry = ModuleRegistry::new();
/// registry
///     .register("examples", "relay", constructor(|name, config| {
///         Ok(Box::new(SimpleModule::new(name, config)?) as Box<dyn SegmentModule>)
///     }))
///     .unwrap();
///
/// assert!(registry.contains("relay", "examples"));
/// assert!(registry.register("examples", "relay", constructor(|name, config| {
///     Ok(Box::new(SimpleModule::new(name, config)?) as Box<dyn SegmentModule>)
/// })).is_err());
/// ```
pub struct ModuleRegistry {
    reference_version: ReleaseVersion,
    modules: RwLock<NamespaceMap>,
}

impl ModuleRegistry {
    /// Creates an empty registry at this crate's release version.
    pub fn new() -> Self {
        Self::with_reference_version(RELEASE_VERSION)
    }

    pub fn with_reference_version(reference_version: ReleaseVersion) -> Self {
        Self {
            reference_version,
            modules: RwLock::new(BTreeMap::new()),
        }
    }

    /// The process-wide registry, created empty on first use.
    pub fn global() -> &'static ModuleRegistry {
        static GLOBAL: OnceLock<ModuleRegistry> = OnceLock::new();
        GLOBAL.get_or_init(ModuleRegistry::new)
    }

    pub fn reference_version(&self) -> ReleaseVersion {
        self.reference_version
    }

    /// Registers `constructor` under `(namespace, module_id)`.
    pub fn register(
        &self,
        namespace: &str,
        module_id: &str,
        constructor: ModuleConstructor,
    ) -> Result<(), RegistryError> {
        let mut modules = self.write();
        let ids = modules.entry(namespace.to_string()).or_default();
        if ids.contains_key(module_id) {
            let error = RegistryError::AlreadyRegistered {
                namespace: namespace.to_string(),
                module_id: module_id.to_string(),
            };
            RegistrationRejected {
                namespace,
                module_id,
                reason: &error,
            }
            .log();
            return Err(error);
        }
        ids.insert(module_id.to_string(), constructor);
        drop(modules);

        ModuleRegistered {
            namespace,
            module_id,
        }
        .log();
        Ok(())
    }

    /// Registers a module that declares the release it was built against.
    ///
    /// The version is checked before anything is inserted.
    pub fn register_versioned(
        &self,
        namespace: &str,
        module_id: &str,
        release_version: ReleaseVersion,
        constructor: ModuleConstructor,
    ) -> Result<(), RegistryError> {
        if !self.is_version_compatible(&release_version) {
            let error = RegistryError::VersionIncompatible {
                module_id: module_id.to_string(),
                candidate: release_version,
                reference: self.reference_version,
            };
            RegistrationRejected {
                namespace,
                module_id,
                reason: &error,
            }
            .log();
            return Err(error);
        }
        self.register(namespace, module_id, constructor)
    }

    /// True iff at least one module is registered under `namespace`.
    pub fn contains_namespace(&self, namespace: &str) -> bool {
        self.read()
            .get(namespace)
            .is_some_and(|ids| !ids.is_empty())
    }

    pub fn contains(&self, module_id: &str, namespace: &str) -> bool {
        self.read()
            .get(namespace)
            .is_some_and(|ids| ids.contains_key(module_id))
    }

    /// Returns the constructor registered under `(namespace, module_id)`.
    ///
    /// The returned handle is the registered constructor itself, not a copy.
    pub fn find(&self, module_id: &str, namespace: &str) -> Result<ModuleConstructor, RegistryError> {
        self.read()
            .get(namespace)
            .and_then(|ids| ids.get(module_id))
            .cloned()
            .ok_or_else(|| RegistryError::ModuleNotFound {
                namespace: namespace.to_string(),
                module_id: module_id.to_string(),
            })
    }

    /// Snapshot of namespace → sorted module ids.
    pub fn registered_modules(&self) -> BTreeMap<String, Vec<String>> {
        self.read()
            .iter()
            .map(|(namespace, ids)| (namespace.clone(), ids.keys().cloned().collect()))
            .collect()
    }

    /// Removes `(namespace, module_id)`.
    ///
    /// When the key is absent this fails with `ModuleNotFound`, unless `optional`
    /// is set, in which case it is a no-op.
    pub fn unregister(
        &self,
        module_id: &str,
        namespace: &str,
        optional: bool,
    ) -> Result<(), RegistryError> {
        let mut modules = self.write();
        let removed = match modules.get_mut(namespace) {
            Some(ids) => {
                let removed = ids.remove(module_id);
                if ids.is_empty() {
                    modules.remove(namespace);
                }
                removed
            }
            None => None,
        };
        drop(modules);

        // Released only now, so whatever the constructor captured drops unlocked.
        if let Some(constructor) = removed {
            drop(constructor);
            ModuleUnregistered {
                namespace,
                module_id,
            }
            .log();
            Ok(())
        } else if optional {
            Ok(())
        } else {
            Err(RegistryError::ModuleNotFound {
                namespace: namespace.to_string(),
                module_id: module_id.to_string(),
            })
        }
    }

    /// Same major version as the registry, and not newer than it.
    pub fn is_version_compatible(&self, candidate: &ReleaseVersion) -> bool {
        candidate.is_compatible_with(&self.reference_version)
    }

    // Nothing user-supplied runs under the lock, so a poisoned lock still holds a
    // consistent map.
    fn read(&self) -> RwLockReadGuard<'_, NamespaceMap> {
        self.modules.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, NamespaceMap> {
        self.modules.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("reference_version", &self.reference_version)
            .field("modules", &self.registered_modules())
            .finish()
    }
}
