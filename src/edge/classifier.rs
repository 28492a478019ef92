// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Compile-time classification of edge endpoints.
//!
//! A type becomes an [`EdgeEndpoint`] by declaring its roles with
//! [`edge_endpoint!`](crate::edge_endpoint). The declaration emits the role
//! markers together with the role set, and every marker requires `EdgeEndpoint`,
//! so the roles a type holds and the roles it is classified with cannot drift
//! apart. The macro grammar requires at least one role. `EdgeEndpoint` is sealed:
//! the macro is the only way in.
//!
//! Types that declare nothing are rejected wherever an endpoint is required:
//!
//! ```rust,compile_fail
//! use dagwood_modules::edge::EdgeEndpoint;
//!
//! struct Plain;
//!
//! fn wire<E: EdgeEndpoint>(_endpoint: &E) {}
//!
//! wire(&Plain);
//! ```

use std::fmt;

use super::roles::{ReadableAcceptor, ReadableProvider, WritableAcceptor, WritableProvider};

/// One of the four capability roles an endpoint can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    WritableProvider,
    WritableAcceptor,
    ReadableProvider,
    ReadableAcceptor,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::WritableProvider,
        Role::WritableAcceptor,
        Role::ReadableProvider,
        Role::ReadableAcceptor,
    ];

    const fn bit(self) -> u8 {
        match self {
            Role::WritableProvider => 0b0001,
            Role::WritableAcceptor => 0b0010,
            Role::ReadableProvider => 0b0100,
            Role::ReadableAcceptor => 0b1000,
        }
    }

    pub fn is_provider(self) -> bool {
        matches!(self, Role::WritableProvider | Role::ReadableProvider)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// The set of roles declared by an endpoint type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RoleSet(u8);

impl RoleSet {
    pub const EMPTY: RoleSet = RoleSet(0);

    pub const fn with(self, role: Role) -> RoleSet {
        RoleSet(self.0 | role.bit())
    }

    pub const fn contains(self, role: Role) -> bool {
        self.0 & role.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Role> {
        Role::ALL.into_iter().filter(move |role| self.contains(*role))
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        iter.into_iter().fold(RoleSet::EMPTY, RoleSet::with)
    }
}

impl fmt::Debug for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let names: Vec<String> = self.iter().map(|role| role.to_string()).collect();
        write!(f, "{}", names.join("+"))
    }
}

/// How data crosses an edge between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Writable provider pushes straight into a writable acceptor.
    Push,
    /// Readable acceptor pulls straight from a readable provider.
    Pull,
    /// Writable provider feeds a buffered channel drained by a readable acceptor.
    Channel,
}

impl EdgeKind {
    /// Picks the edge kind for a source/sink pair, preferring a direct connection.
    ///
    /// A readable provider cannot feed a writable acceptor without something
    /// driving it, so that pairing yields `None`.
    pub fn between(source: RoleSet, sink: RoleSet) -> Option<EdgeKind> {
        if source.contains(Role::WritableProvider) && sink.contains(Role::WritableAcceptor) {
            Some(EdgeKind::Push)
        } else if source.contains(Role::ReadableProvider) && sink.contains(Role::ReadableAcceptor) {
            Some(EdgeKind::Pull)
        } else if source.contains(Role::WritableProvider) && sink.contains(Role::ReadableAcceptor) {
            Some(EdgeKind::Channel)
        } else {
            None
        }
    }
}

#[doc(hidden)]
pub mod __private {
    pub trait Sealed {}
}

/// Marker aliases used by [`edge_endpoint!`](crate::edge_endpoint) to map a role
/// name onto the nominal trait it implements.
#[doc(hidden)]
pub mod markers {
    pub use crate::edge::roles::ReadableAcceptorBase as ReadableAcceptor;
    pub use crate::edge::roles::ReadableProviderBase as ReadableProvider;
    pub use crate::edge::roles::WritableAcceptorBase as WritableAcceptor;
    pub use crate::edge::roles::WritableProviderBase as WritableProvider;
}

/// A type holding at least one capability role.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an edge endpoint",
    label = "expected an `EdgeEndpoint`",
    note = "implement at least one capability role and declare it with `edge_endpoint!`"
)]
pub trait EdgeEndpoint: __private::Sealed {
    const ROLES: RoleSet;

    fn roles(&self) -> RoleSet {
        Self::ROLES
    }
}

/// Declares the capability roles of an endpoint type.
///
/// ```rust
/// use dagwood_modules::edge::{EdgeEndpoint, Role, WritableAcceptor, WritableProvider};
/// use dagwood_modules::edge_endpoint;
///
/// struct Counter {
///     sink: Option<Box<dyn WritableAcceptor<u64> + Send>>,
/// }
///
/// impl WritableProvider<u64> for Counter {
///     fn attach_writable_sink(&mut self, sink: Box<dyn WritableAcceptor<u64> + Send>) {
///         self.sink = Some(sink);
///     }
/// }
///
/// edge_endpoint!(Counter => WritableProvider);
///
/// assert!(Counter::ROLES.contains(Role::WritableProvider));
/// assert!(!Counter::ROLES.contains(Role::ReadableProvider));
/// ```
///
/// Generic endpoints list their parameters in brackets:
/// `edge_endpoint!(impl[T: Send] Relay<T> => WritableAcceptor, ReadableProvider);`
#[macro_export]
macro_rules! edge_endpoint {
    (@declare [$($generics:tt)*] $ty:ty => $($role:ident),+) => {
        impl<$($generics)*> $crate::edge::__private::Sealed for $ty {}

        impl<$($generics)*> $crate::edge::EdgeEndpoint for $ty {
            const ROLES: $crate::edge::RoleSet =
                $crate::edge::RoleSet::EMPTY$(.with($crate::edge::Role::$role))+;
        }
    };
    (@role [$($generics:tt)*] $ty:ty => $role:ident) => {
        impl<$($generics)*> $crate::edge::markers::$role for $ty {}
    };
    (impl $generics:tt $ty:ty => $($role:ident),+ $(,)?) => {
        $crate::edge_endpoint!(@declare $generics $ty => $($role),+);
        $($crate::edge_endpoint!(@role $generics $ty => $role);)+
    };
    ($ty:ty => $($role:ident),+ $(,)?) => {
        $crate::edge_endpoint!(impl [] $ty => $($role),+);
    };
}

/// Wires a push edge between two concrete endpoints.
pub fn connect_writable<T, S, D>(source: &mut S, sink: D)
where
    T: 'static,
    S: WritableProvider<T> + EdgeEndpoint,
    D: WritableAcceptor<T> + EdgeEndpoint + Send + 'static,
{
    source.attach_writable_sink(Box::new(sink));
}

/// Wires a pull edge between two concrete endpoints.
pub fn connect_readable<T, P, A>(source: P, sink: &mut A)
where
    T: 'static,
    P: ReadableProvider<T> + EdgeEndpoint + Send + 'static,
    A: ReadableAcceptor<T> + EdgeEndpoint,
{
    sink.attach_readable_source(Box::new(source));
}
