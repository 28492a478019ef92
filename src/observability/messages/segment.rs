// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for segment wiring events.

use crate::edge::{EdgeKind, RoleSet};
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// An object or module was placed in a segment.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct ObjectAdded<'a> {
    pub segment: &'a str,
    pub name: &'a str,
    pub roles: RoleSet,
}

impl Display for ObjectAdded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Segment '{}' added object '{}' with roles {}",
            self.segment, self.name, self.roles
        )
    }
}

impl StructuredLog for ObjectAdded<'_> {
    fn log(&self) {
        tracing::debug!(
            segment = self.segment,
            object = self.name,
            roles = %self.roles,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "object_added",
            span_name = name,
            segment = self.segment,
            object = self.name,
            roles = %self.roles,
        )
    }
}

/// An edge was created between two segment objects.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use dagwood_modules::edge::EdgeKind;
/// use dagwood_modules::observability::messages::segment::EdgeCreated;
///
/// let msg = EdgeCreated {
///     segment: "ingest",
///     source: "numbers",
///     sink: "printer",
///     kind: EdgeKind::Push,
/// };
///
/// assert_eq!(msg.to_string(), "Segment 'ingest' connected 'numbers' -> 'printer' (Push)");
/// ```
pub struct EdgeCreated<'a> {
    pub segment: &'a str,
    pub source: &'a str,
    pub sink: &'a str,
    pub kind: EdgeKind,
}

impl Display for EdgeCreated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Segment '{}' connected '{}' -> '{}' ({:?})",
            self.segment, self.source, self.sink, self.kind
        )
    }
}

impl StructuredLog for EdgeCreated<'_> {
    fn log(&self) {
        tracing::info!(
            segment = self.segment,
            source = self.source,
            sink = self.sink,
            kind = ?self.kind,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "edge_created",
            span_name = name,
            segment = self.segment,
            source = self.source,
            sink = self.sink,
            kind = ?self.kind,
        )
    }
}
