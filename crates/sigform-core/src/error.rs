// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Sigform.

use thiserror::Error;

/// Top-level error type for all Sigform operations.
#[derive(Debug, Error)]
pub enum SigformError {
    // -- Codec errors --
    #[error("unsupported character U+{codepoint:04X} at position {position}")]
    UnsupportedCharacter { codepoint: u32, position: usize },

    #[error("malformed encoded value: {0}")]
    MalformedEncoding(String),

    // -- Evidence errors --
    #[error("digest unavailable: {0}")]
    DigestUnavailable(String),

    #[error("integrity check failed: expected {expected}, got {actual}")]
    IntegrityMismatch { expected: String, actual: String },

    // -- Collaborators --
    #[error("feature not available on this platform")]
    PlatformUnavailable,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SigformError>;
