// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Capability roles and the endpoint classifier.
//!
//! Anything that can sit at either end of a producer/consumer edge implements one
//! or more of the four capability roles:
//!
//! | Role               | Style | Direction |
//! |--------------------|-------|-----------|
//! | `WritableProvider` | push  | out       |
//! | `WritableAcceptor` | push  | in        |
//! | `ReadableProvider` | pull  | out       |
//! | `ReadableAcceptor` | pull  | in        |
//!
//! and declares them with [`edge_endpoint!`](crate::edge_endpoint), which makes the
//! type an [`EdgeEndpoint`]. Graph-building operations take `EdgeEndpoint` bounds,
//! so an endpoint with no roles never reaches them.

mod classifier;
mod roles;

pub use classifier::{connect_readable, connect_writable, EdgeEndpoint, EdgeKind, Role, RoleSet};
#[doc(hidden)]
pub use classifier::{__private, markers};
pub use roles::{
    ReadableAcceptor, ReadableAcceptorBase, ReadableProvider, ReadableProviderBase, WritableAcceptor,
    WritableAcceptorBase, WritableProvider, WritableProviderBase,
};
