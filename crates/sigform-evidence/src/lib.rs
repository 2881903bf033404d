// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! sigform-evidence — Electronic-signature evidence for audit trails.
//!
//! Captures who signed, when, with what consent, and on which client,
//! binds the signature to its timestamp with a one-way digest, checks the
//! record is complete, and renders it into a canonical audit-trail block.
//!
//! The environment, digest primitive, and clock are injected through the
//! `sigform-bridge` traits so capture is deterministic under test.

pub mod audit;
pub mod fingerprint;
pub mod integrity;
pub mod recorder;
pub mod validation;

pub use audit::format_for_audit;
pub use fingerprint::device_fingerprint;
pub use integrity::Sha256Digest;
pub use recorder::SignatureEvidenceRecorder;
pub use validation::{EvidenceDefect, ValidationReport, validate};
