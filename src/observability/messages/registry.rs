// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for module registry events.
//!
//! This module contains message types for logging events related to:
//! * Module registration and rejected registrations
//! * Module removal
//! * Module construction from a registered constructor

use crate::errors::RegistryError;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A module constructor was added to the registry.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use dagwood_modules::observability::messages::registry::ModuleRegistered;
///
/// let msg = ModuleRegistered {
///     namespace: "default",
///     module_id: "SimpleModule",
/// };
///
/// assert_eq!(msg.to_string(), "Registered module 'SimpleModule' in namespace 'default'");
/// ```
pub struct ModuleRegistered<'a> {
    pub namespace: &'a str,
    pub module_id: &'a str,
}

impl Display for ModuleRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Registered module '{}' in namespace '{}'",
            self.module_id, self.namespace
        )
    }
}

impl StructuredLog for ModuleRegistered<'_> {
    fn log(&self) {
        tracing::info!(
            namespace = self.namespace,
            module_id = self.module_id,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "module_registered",
            span_name = name,
            namespace = self.namespace,
            module_id = self.module_id,
        )
    }
}

/// A module constructor was removed from the registry.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ModuleUnregistered<'a> {
    pub namespace: &'a str,
    pub module_id: &'a str,
}

impl Display for ModuleUnregistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Unregistered module '{}' from namespace '{}'",
            self.module_id, self.namespace
        )
    }
}

impl StructuredLog for ModuleUnregistered<'_> {
    fn log(&self) {
        tracing::info!(
            namespace = self.namespace,
            module_id = self.module_id,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "module_unregistered",
            span_name = name,
            namespace = self.namespace,
            module_id = self.module_id,
        )
    }
}

/// A registration was refused and the registry left unchanged.
///
/// # Log Level
/// `warn!` - The caller gets the error back; the registry itself is fine
pub struct RegistrationRejected<'a> {
    pub namespace: &'a str,
    pub module_id: &'a str,
    pub reason: &'a RegistryError,
}

impl Display for RegistrationRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Rejected registration of module '{}' in namespace '{}': {}",
            self.module_id, self.namespace, self.reason
        )
    }
}

impl StructuredLog for RegistrationRejected<'_> {
    fn log(&self) {
        tracing::warn!(
            namespace = self.namespace,
            module_id = self.module_id,
            reason = %self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "registration_rejected",
            span_name = name,
            namespace = self.namespace,
            module_id = self.module_id,
            reason = %self.reason,
        )
    }
}

/// A module instance was built from a registered constructor.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
///
/// # Example
/// ```
/// use dagwood_modules::observability::messages::registry::ModuleConstructed;
///
/// let msg = ModuleConstructed {
///     module_id: "SourceModule",
///     namespace: "default",
///     module_name: "numbers",
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct ModuleConstructed<'a> {
    pub module_id: &'a str,
    pub namespace: &'a str,
    pub module_name: &'a str,
}

impl Display for ModuleConstructed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Constructed module '{}' from '{}/{}'",
            self.module_name, self.namespace, self.module_id
        )
    }
}

impl StructuredLog for ModuleConstructed<'_> {
    fn log(&self) {
        tracing::debug!(
            module_id = self.module_id,
            namespace = self.namespace,
            module_name = self.module_name,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "module_constructed",
            span_name = name,
            module_id = self.module_id,
            namespace = self.namespace,
            module_name = self.module_name,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_message_display() {
        let reason = RegistryError::AlreadyRegistered {
            namespace: "default".to_string(),
            module_id: "SinkModule".to_string(),
        };

        struct TestCase {
            name: &'static str,
            message: String,
            expected: &'static str,
        }

        let test_cases = vec![
            TestCase {
                name: "registered",
                message: ModuleRegistered {
                    namespace: "default",
                    module_id: "SinkModule",
                }
                .to_string(),
                expected: "Registered module 'SinkModule' in namespace 'default'",
            },
            TestCase {
                name: "unregistered",
                message: ModuleUnregistered {
                    namespace: "ns",
                    module_id: "m",
                }
                .to_string(),
                expected: "Unregistered module 'm' from namespace 'ns'",
            },
            TestCase {
                name: "constructed",
                message: ModuleConstructed {
                    module_id: "SourceModule",
                    namespace: "default",
                    module_name: "numbers",
                }
                .to_string(),
                expected: "Constructed module 'numbers' from 'default/SourceModule'",
            },
        ];

        for test_case in test_cases {
            assert_eq!(test_case.message, test_case.expected, "Test case '{}'", test_case.name);
        }

        let rejected = RegistrationRejected {
            namespace: "default",
            module_id: "SinkModule",
            reason: &reason,
        }
        .to_string();
        assert!(rejected.starts_with("Rejected registration of module 'SinkModule'"));
        assert!(rejected.ends_with(&reason.to_string()));
    }
}
