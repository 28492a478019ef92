// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Failure converting a host configuration value into a configuration document.
///
/// Every variant carries the path of the offending value, written as a
/// slash-separated pointer from the document root (`/stages/0/name`).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarshalError {
    #[error("unsupported value of kind '{kind}' at '{path}'")]
    UnsupportedKind { path: String, kind: String },

    #[error("mapping key at '{path}' is not a string")]
    NonStringKey { path: String },

    #[error("number at '{path}' is not finite")]
    NonFiniteNumber { path: String },
}
