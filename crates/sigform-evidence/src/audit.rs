// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Audit trail rendering — the canonical text form of a signature record.
//
// Layout (one field per line, `\n` separated, no trailing newline):
//
//   Signature Audit Trail
//   Signed by: <signer>
//   Timestamp: <RFC 3339>
//   Timezone: <IANA name>
//   Origin address: <address, or "pending" until the server fills it>
//   Screen: <W>x<H>
//   User agent: <ua>
//   Device fingerprint: <fp>
//   Integrity hash: <hex or "unknown">
//   Consent given: Yes|No
//
// The output may itself be retained as evidence, so it must be
// byte-identical for equal records.

use sigform_core::SignatureEvidence;

const PENDING_ORIGIN: &str = "pending";

/// Render `evidence` as a canonical audit-trail block.
pub fn format_for_audit(evidence: &SignatureEvidence) -> String {
    let origin = if evidence.origin_address.is_empty() {
        PENDING_ORIGIN
    } else {
        evidence.origin_address.as_str()
    };

    [
        "Signature Audit Trail".to_owned(),
        format!("Signed by: {}", evidence.signer_identity),
        format!("Timestamp: {}", evidence.timestamp),
        format!("Timezone: {}", evidence.environment.timezone),
        format!("Origin address: {origin}"),
        format!("Screen: {}", evidence.environment.screen_resolution()),
        format!("User agent: {}", evidence.environment.user_agent),
        format!("Device fingerprint: {}", evidence.device_fingerprint),
        format!("Integrity hash: {}", evidence.integrity_digest),
        format!(
            "Consent given: {}",
            if evidence.consent_given { "Yes" } else { "No" }
        ),
    ]
    .join("\n")
}
