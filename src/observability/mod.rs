// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Diagnostic and operational log lines are emitted through message structs
//! rather than ad-hoc format strings. Each message implements `Display` for the
//! human-readable line and [`StructuredLog`](messages::StructuredLog) to emit it
//! with its fields attached.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::registry` - module registration, removal and construction
//! * `messages::segment` - segment wiring events
//!
//! # Usage
//!
//! ```rust
//! use dagwood_modules::observability::messages::registry::ModuleRegistered;
//! use dagwood_modules::observability::messages::StructuredLog;
//!
//! ModuleRegistered {
//!     namespace: "default",
//!     module_id: "SimpleModule",
//! }
//! .log();
//! ```

pub mod messages;
