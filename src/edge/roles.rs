// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Capability role traits for edge endpoints.
//!
//! Every role comes in two layers:
//!
//! * a payload-agnostic marker (`WritableProviderBase`, ...) that declares the role
//!   nominally, and
//! * a payload-typed trait (`WritableProvider<T>`, ...) that carries the operations.
//!
//! The typed trait has its marker as a supertrait, and every marker has
//! [`EdgeEndpoint`] as its supertrait. Holding any role therefore makes a type an
//! endpoint: a role impl without a declaration does not compile. The markers are
//! emitted by [`edge_endpoint!`](crate::edge_endpoint) together with the role set,
//! which is how a generic endpoint is recognised regardless of its payload
//! parameter.
//!
//! ```rust,compile_fail
//! use dagwood_modules::edge::{WritableAcceptor, WritableProvider};
//!
//! struct Undeclared;
//!
//! // Missing `edge_endpoint!(Undeclared => WritableProvider)`.
//! impl WritableProvider<u8> for Undeclared {
//!     fn attach_writable_sink(&mut self, _sink: Box<dyn WritableAcceptor<u8> + Send>) {}
//! }
//! ```

use super::classifier::EdgeEndpoint;
use crate::errors::EdgeError;

/// Nominal declaration of the push-style output role.
pub trait WritableProviderBase: EdgeEndpoint {}

/// Nominal declaration of the push-style input role.
pub trait WritableAcceptorBase: EdgeEndpoint {}

/// Nominal declaration of the pull-style output role.
pub trait ReadableProviderBase: EdgeEndpoint {}

/// Nominal declaration of the pull-style input role.
pub trait ReadableAcceptorBase: EdgeEndpoint {}

/// Pushes values of type `T` into an attached acceptor.
pub trait WritableProvider<T>: WritableProviderBase {
    /// Attach the downstream acceptor. Replaces any previously attached sink.
    fn attach_writable_sink(&mut self, sink: Box<dyn WritableAcceptor<T> + Send>);
}

/// Accepts values of type `T` pushed by an upstream provider.
pub trait WritableAcceptor<T>: WritableAcceptorBase {
    fn accept_write(&mut self, value: T) -> Result<(), EdgeError>;
}

/// Hands out values of type `T` when pulled.
pub trait ReadableProvider<T>: ReadableProviderBase {
    /// Returns `None` once the provider is exhausted.
    fn provide_read(&mut self) -> Option<T>;
}

/// Pulls values of type `T` from an attached provider.
pub trait ReadableAcceptor<T>: ReadableAcceptorBase {
    fn attach_readable_source(&mut self, source: Box<dyn ReadableProvider<T> + Send>);
}
