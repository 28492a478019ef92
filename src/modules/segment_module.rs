// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::errors::ModuleConstructionError;
use crate::segment::SegmentObject;

/// Opaque structured key/value payload handed to module constructors.
///
/// The registry never inspects it; validating its shape is the module's job.
pub type ConfigDocument = serde_json::Value;

/// A dynamically discoverable unit of segment processing logic.
///
/// Instances come out of a [`ModuleConstructor`] and are owned by whoever called
/// it. Through [`SegmentObject`] every module exposes the [`ObjectProperties`]
/// (name and capability roles) a segment needs to wire it.
///
/// [`ObjectProperties`]: crate::segment::ObjectProperties
pub trait SegmentModule: SegmentObject {
    /// Instance name given at construction.
    fn name(&self) -> &str;

    /// Type name of the module implementation.
    fn module_type(&self) -> &'static str;

    /// Configuration the module was constructed with.
    fn config(&self) -> &ConfigDocument;

    fn input_ports(&self) -> Vec<String>;

    fn output_ports(&self) -> Vec<String>;
}

/// Stored constructor: `(name, config) -> module`.
pub type ModuleConstructor = Arc<
    dyn Fn(String, ConfigDocument) -> Result<Box<dyn SegmentModule>, ModuleConstructionError>
        + Send
        + Sync,
>;

/// Wraps a closure or function as a [`ModuleConstructor`].
///
/// ```
/// use dagwood_modules::modules::{constructor, ModuleConstructor, SimpleModule, SegmentModule};
///
/// let ctor: ModuleConstructor = constructor(|name, config| {
///     Ok(Box::new(SimpleModule::new(name, config)?) as Box<dyn SegmentModule>)
/// });
/// let module = ctor("relay".to_string(), serde_json::json!({})).unwrap();
/// assert_eq!(module.name(), "relay");
/// ```
pub fn constructor<F>(f: F) -> ModuleConstructor
where
    F: Fn(String, ConfigDocument) -> Result<Box<dyn SegmentModule>, ModuleConstructionError>
        + Send
        + Sync
        + 'static,
{
    Arc::new(f)
}
