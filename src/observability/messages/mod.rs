// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! # Organization
//!
//! * `registry` - registration, removal and module construction
//! * `segment` - objects and edges added to a segment
//!
//! # Usage Pattern
//!
//! ```rust
//! use dagwood_modules::observability::messages::registry::ModuleUnregistered;
//!
//! let msg = ModuleUnregistered {
//!     namespace: "default",
//!     module_id: "SinkModule",
//! };
//!
//! tracing::info!("{}", msg);
//! ```

use tracing::Span;

pub mod registry;
pub mod segment;

/// A log message that knows its level and structured fields.
pub trait StructuredLog {
    /// Emits the message at its level with its fields attached.
    fn log(&self);

    /// Opens a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
