// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Completeness checks on captured signature evidence.
//
// Every check runs; defects are reported in a fixed order so the same
// record always yields the same report.

use serde::Serialize;
use sigform_core::config::EvidenceConfig;
use sigform_core::{SignatureEvidence, UNKNOWN};
use thiserror::Error;

/// A reason a signature record cannot be accepted. The `Display` text is
/// the human-readable reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum EvidenceDefect {
    #[error("Timestamp is required")]
    MissingTimestamp,

    #[error("User agent is required")]
    MissingUserAgent,

    #[error("Signature must be at least {min} characters")]
    SignatureTooShort { min: usize },

    #[error("Consent to sign electronically is required")]
    ConsentNotGiven,

    #[error("Integrity hash is required")]
    MissingIntegrityDigest,

    #[error("Integrity hash could not be computed")]
    UnverifiableIntegrityDigest,
}

/// Outcome of [`validate`]. `valid` is true exactly when `errors` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<EvidenceDefect>,
}

impl ValidationReport {
    /// The reasons as display strings, in report order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Check that `evidence` carries everything an audit trail needs.
///
/// With the default config the `unknown` digest sentinel counts as present,
/// so evidence captured without a digest primitive is still accepted. Set
/// [`EvidenceConfig::require_verifiable_digest`] to reject it.
pub fn validate(evidence: &SignatureEvidence, config: &EvidenceConfig) -> ValidationReport {
    let mut errors = Vec::new();

    if evidence.timestamp.is_empty() {
        errors.push(EvidenceDefect::MissingTimestamp);
    }
    if evidence.environment.user_agent.is_empty() {
        errors.push(EvidenceDefect::MissingUserAgent);
    }
    if evidence.signer_identity.trim().chars().count() < config.min_signature_chars {
        errors.push(EvidenceDefect::SignatureTooShort {
            min: config.min_signature_chars,
        });
    }
    if !evidence.consent_given {
        errors.push(EvidenceDefect::ConsentNotGiven);
    }
    if evidence.integrity_digest.is_empty() {
        errors.push(EvidenceDefect::MissingIntegrityDigest);
    } else if config.require_verifiable_digest && evidence.integrity_digest == UNKNOWN {
        errors.push(EvidenceDefect::UnverifiableIntegrityDigest);
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}
