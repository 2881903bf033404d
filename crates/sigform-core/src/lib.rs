// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sigform — Core types and error definitions shared across all crates.

pub mod config;
pub mod error;
pub mod human_errors;
pub mod types;

pub use config::{CodecConfig, EvidenceConfig, SigformConfig};
pub use error::SigformError;
pub use types::*;

/// Placeholder for any value that could not be observed or computed.
///
/// Used both as the default for absent environment strings and as the
/// integrity-digest sentinel. It can never collide with a hex digest.
pub const UNKNOWN: &str = "unknown";
