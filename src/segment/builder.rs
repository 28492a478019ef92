// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::edge::{EdgeEndpoint, EdgeKind};
use crate::errors::{RegistryError, SegmentError};
use crate::modules::{ConfigDocument, ModuleRegistry, SegmentModule};
use crate::observability::messages::registry::ModuleConstructed;
use crate::observability::messages::segment::{EdgeCreated, ObjectAdded};
use crate::observability::messages::StructuredLog;

use super::object::{Object, ObjectProperties, ObjectPropertiesLike, ObjectRef, SegmentObject};

/// An edge recorded between two segment objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub source: String,
    pub sink: String,
    pub kind: EdgeKind,
}

/// Assembles the objects and edges of one segment.
///
/// Object names are unique within a segment. Edges are only recorded between
/// objects the segment already holds, and only when the source offers a provider
/// role the sink can accept (see [`EdgeKind::between`]).
///
/// # Example
/// ```
/// use dagwood_modules::modules::{register_builtin_modules, ModuleRegistry, DEFAULT_NAMESPACE};
/// use dagwood_modules::segment::SegmentBuilder;
/// use serde_json::json;
///
/// let registry = ModuleRegistry::new();
/// register_builtin_modules(&registry).unwrap();
///
/// let mut builder = SegmentBuilder::new("main");
/// builder
///     .make_module(&registry, "SourceModule", DEFAULT_NAMESPACE, "source", json!({"count": 3}))
///     .unwrap();
/// builder
///     .make_module(&registry, "SinkModule", DEFAULT_NAMESPACE, "sink", json!({}))
///     .unwrap();
///
/// let edge = builder.make_edge("source", "sink").unwrap();
/// assert_eq!(edge.sink, "sink");
/// ```
pub struct SegmentBuilder {
    name: String,
    objects: BTreeMap<String, Arc<ObjectProperties>>,
    modules: BTreeMap<String, Arc<dyn SegmentModule>>,
    edges: Vec<EdgeRecord>,
}

impl SegmentBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: BTreeMap::new(),
            modules: BTreeMap::new(),
            edges: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wraps a concrete endpoint as a named segment object.
    pub fn make_object<E>(
        &mut self,
        name: impl Into<String>,
        endpoint: E,
    ) -> Result<Arc<Object<E>>, SegmentError>
    where
        E: EdgeEndpoint + Send + 'static,
    {
        let name = name.into();
        self.ensure_unused(&name)?;

        let object = Arc::new(Object::new(name, endpoint));
        self.insert_object(object.properties());
        Ok(object)
    }

    /// Looks up a module constructor and places the constructed module in the segment.
    ///
    /// The registry is only consulted for the constructor; construction itself runs
    /// without holding the registry lock.
    pub fn make_module(
        &mut self,
        registry: &ModuleRegistry,
        module_id: &str,
        namespace: &str,
        module_name: impl Into<String>,
        config: ConfigDocument,
    ) -> Result<Arc<dyn SegmentModule>, SegmentError> {
        let module_name = module_name.into();
        self.ensure_unused(&module_name)?;

        let constructor = registry.find(module_id, namespace)?;
        let module: Arc<dyn SegmentModule> =
            Arc::from(constructor(module_name, config).map_err(RegistryError::from)?);

        ModuleConstructed {
            module_id,
            namespace,
            module_name: module.name(),
        }
        .log();

        self.add_module(Arc::clone(&module))?;
        Ok(module)
    }

    /// Places an already constructed module in the segment.
    pub fn add_module(&mut self, module: Arc<dyn SegmentModule>) -> Result<(), SegmentError> {
        let properties = module.properties();
        self.ensure_unused(properties.name())?;

        self.modules
            .insert(properties.name().to_string(), Arc::clone(&module));
        self.insert_object(properties);
        Ok(())
    }

    /// Records an edge from `source` to `sink`.
    pub fn make_edge<S, D>(&mut self, source: S, sink: D) -> Result<EdgeRecord, SegmentError>
    where
        S: ObjectPropertiesLike,
        D: ObjectPropertiesLike,
    {
        let source = self.resolve(source.into_object_ref())?;
        let sink = self.resolve(sink.into_object_ref())?;

        let kind = EdgeKind::between(source.roles(), sink.roles()).ok_or_else(|| {
            SegmentError::IncompatibleEndpoints {
                source_name: source.name().to_string(),
                source_roles: source.roles(),
                sink_name: sink.name().to_string(),
                sink_roles: sink.roles(),
            }
        })?;

        let edge = EdgeRecord {
            source: source.name().to_string(),
            sink: sink.name().to_string(),
            kind,
        };

        EdgeCreated {
            segment: &self.name,
            source: &edge.source,
            sink: &edge.sink,
            kind: edge.kind,
        }
        .log();

        self.edges.push(edge.clone());
        Ok(edge)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    pub fn object(&self, name: &str) -> Option<Arc<ObjectProperties>> {
        self.objects.get(name).cloned()
    }

    pub fn module(&self, name: &str) -> Option<Arc<dyn SegmentModule>> {
        self.modules.get(name).cloned()
    }

    pub fn object_names(&self) -> impl Iterator<Item = &str> {
        self.objects.keys().map(String::as_str)
    }

    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }

    fn ensure_unused(&self, name: &str) -> Result<(), SegmentError> {
        if self.objects.contains_key(name) {
            return Err(SegmentError::DuplicateObject {
                segment: self.name.clone(),
                name: name.to_string(),
            });
        }
        Ok(())
    }

    fn insert_object(&mut self, properties: Arc<ObjectProperties>) {
        ObjectAdded {
            segment: &self.name,
            name: properties.name(),
            roles: properties.roles(),
        }
        .log();
        self.objects
            .insert(properties.name().to_string(), properties);
    }

    fn resolve(&self, object: ObjectRef) -> Result<Arc<ObjectProperties>, SegmentError> {
        let unknown = || SegmentError::UnknownObject {
            segment: self.name.clone(),
            name: object.name().to_string(),
        };

        let held = self.objects.get(object.name()).ok_or_else(unknown)?;
        let matches = match &object {
            ObjectRef::Named(_) => true,
            ObjectRef::Resolved(properties) => Arc::ptr_eq(properties, held),
            ObjectRef::Described(properties) => properties == held.as_ref(),
        };
        if matches {
            Ok(Arc::clone(held))
        } else {
            Err(unknown())
        }
    }
}

impl fmt::Debug for SegmentBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentBuilder")
            .field("name", &self.name)
            .field("objects", &self.objects.keys().collect::<Vec<_>>())
            .field("modules", &self.modules.keys().collect::<Vec<_>>())
            .field("edges", &self.edges)
            .finish()
    }
}
