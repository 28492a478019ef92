// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod bridge;        // host-facing registry proxy
pub mod config;        // graph descriptions
pub mod edge;          // capability roles + endpoint classification
pub mod errors;        // error handling
pub mod modules;       // segment modules + registry
pub mod observability;
pub mod segment;       // segment objects + wiring

#[cfg(test)]
mod test_support;
