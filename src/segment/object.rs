// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Graph-managed objects and the references that name them.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::edge::{EdgeEndpoint, RoleSet};
use crate::modules::SegmentModule;

/// Identity and capabilities of an object placed in a segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectProperties {
    name: String,
    type_name: String,
    roles: RoleSet,
}

impl ObjectProperties {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, roles: RoleSet) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            roles,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn roles(&self) -> RoleSet {
        self.roles
    }
}

/// Anything a segment manages: a wrapped endpoint or a constructed module.
pub trait SegmentObject: Send + Sync {
    /// The object's shared record. Every call returns the same allocation, which
    /// is what segments match handles against.
    fn properties(&self) -> Arc<ObjectProperties>;
}

/// A named, segment-managed wrapper around a concrete edge endpoint.
pub struct Object<E> {
    properties: Arc<ObjectProperties>,
    endpoint: Mutex<E>,
}

impl<E: EdgeEndpoint> Object<E> {
    pub fn new(name: impl Into<String>, endpoint: E) -> Self {
        let properties = ObjectProperties::new(name, std::any::type_name::<E>(), E::ROLES);
        Self {
            properties: Arc::new(properties),
            endpoint: Mutex::new(endpoint),
        }
    }

    /// Exclusive access to the wrapped endpoint, e.g. for typed wiring.
    pub fn endpoint(&self) -> MutexGuard<'_, E> {
        self.endpoint.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn into_inner(self) -> E {
        self.endpoint
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E: EdgeEndpoint + Send> SegmentObject for Object<E> {
    fn properties(&self) -> Arc<ObjectProperties> {
        Arc::clone(&self.properties)
    }
}

impl<E> fmt::Debug for Object<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("properties", &self.properties)
            .finish_non_exhaustive()
    }
}

/// A reference to a segment object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectRef {
    /// The shared record of a specific object; matches only that object.
    Resolved(Arc<ObjectProperties>),
    /// A detached record; matches the object it describes field for field.
    Described(ObjectProperties),
    /// Looked up in the segment when the edge is built.
    Named(String),
}

impl ObjectRef {
    pub fn name(&self) -> &str {
        match self {
            ObjectRef::Resolved(properties) => properties.name(),
            ObjectRef::Described(properties) => properties.name(),
            ObjectRef::Named(name) => name,
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Values accepted wherever a segment object is referenced.
///
/// Exactly these shapes qualify:
///
/// * a graph-managed object: [`Object<E>`] or a boxed [`SegmentModule`],
/// * a shared handle to one: `Arc<Object<E>>` or `Arc<dyn SegmentModule>`,
/// * an [`ObjectProperties`] record,
/// * a shared handle to that record: `Arc<ObjectProperties>`,
/// * a string identifier: `&str`, `String` or `&String`,
/// * an [`ObjectRef`] built from any of the above.
///
/// ```rust,compile_fail
/// use dagwood_modules::segment::SegmentBuilder;
///
/// let mut builder = SegmentBuilder::new("main");
/// // An integer is not an object reference.
/// builder.make_edge(42u32, "sink");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a segment object reference",
    label = "expected an `ObjectPropertiesLike` value",
    note = "pass an `Object`, a module, `ObjectProperties`, a shared handle to one of those, or an object name"
)]
pub trait ObjectPropertiesLike: sealed::Sealed {
    fn into_object_ref(self) -> ObjectRef;
}

impl<E: EdgeEndpoint + Send> sealed::Sealed for Object<E> {}
impl<E: EdgeEndpoint + Send> ObjectPropertiesLike for Object<E> {
    fn into_object_ref(self) -> ObjectRef {
        ObjectRef::Resolved(self.properties)
    }
}

impl<E: EdgeEndpoint + Send> sealed::Sealed for Arc<Object<E>> {}
impl<E: EdgeEndpoint + Send> ObjectPropertiesLike for Arc<Object<E>> {
    fn into_object_ref(self) -> ObjectRef {
        ObjectRef::Resolved(self.properties())
    }
}

impl sealed::Sealed for Box<dyn SegmentModule> {}
impl ObjectPropertiesLike for Box<dyn SegmentModule> {
    fn into_object_ref(self) -> ObjectRef {
        ObjectRef::Resolved(self.properties())
    }
}

impl sealed::Sealed for Arc<dyn SegmentModule> {}
impl ObjectPropertiesLike for Arc<dyn SegmentModule> {
    fn into_object_ref(self) -> ObjectRef {
        ObjectRef::Resolved(self.properties())
    }
}

impl sealed::Sealed for ObjectProperties {}
impl ObjectPropertiesLike for ObjectProperties {
    fn into_object_ref(self) -> ObjectRef {
        ObjectRef::Described(self)
    }
}

impl sealed::Sealed for Arc<ObjectProperties> {}
impl ObjectPropertiesLike for Arc<ObjectProperties> {
    fn into_object_ref(self) -> ObjectRef {
        ObjectRef::Resolved(self)
    }
}

impl sealed::Sealed for ObjectRef {}
impl ObjectPropertiesLike for ObjectRef {
    fn into_object_ref(self) -> ObjectRef {
        self
    }
}

impl sealed::Sealed for &str {}
impl ObjectPropertiesLike for &str {
    fn into_object_ref(self) -> ObjectRef {
        ObjectRef::Named(self.to_string())
    }
}

impl sealed::Sealed for String {}
impl ObjectPropertiesLike for String {
    fn into_object_ref(self) -> ObjectRef {
        ObjectRef::Named(self)
    }
}

impl sealed::Sealed for &String {}
impl ObjectPropertiesLike for &String {
    fn into_object_ref(self) -> ObjectRef {
        ObjectRef::Named(self.clone())
    }
}
