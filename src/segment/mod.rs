// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Segment assembly: graph-managed objects, object references and the builder that
//! records edges between them.

mod builder;
mod object;

pub use builder::{EdgeRecord, SegmentBuilder};
pub use object::{Object, ObjectProperties, ObjectPropertiesLike, ObjectRef, SegmentObject};
