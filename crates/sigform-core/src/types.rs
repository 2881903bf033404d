// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for signature evidence.

use serde::{Deserialize, Serialize};

use crate::UNKNOWN;
use crate::error::Result;

/// Client environment observed at the moment of signing.
///
/// Corroborating evidence only. Every field is best-effort and untrusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentContext {
    /// Client software identifier (browser user agent or host application).
    pub user_agent: String,
    pub screen_width: u32,
    pub screen_height: u32,
    /// IANA timezone name, or `unknown`.
    pub timezone: String,
}

impl EnvironmentContext {
    /// Display geometry as `WIDTHxHEIGHT`.
    pub fn screen_resolution(&self) -> String {
        format!("{}x{}", self.screen_width, self.screen_height)
    }
}

impl Default for EnvironmentContext {
    fn default() -> Self {
        Self {
            user_agent: UNKNOWN.to_owned(),
            screen_width: 0,
            screen_height: 0,
            timezone: UNKNOWN.to_owned(),
        }
    }
}

/// Evidence record for a single electronic-signature action.
///
/// Created once by the recorder and never mutated by Sigform afterwards;
/// ownership passes to the caller for transmission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureEvidence {
    /// Capture instant, RFC 3339 UTC with millisecond precision.
    pub timestamp: String,
    /// The signature value as typed or drawn by the signer.
    pub signer_identity: String,
    pub consent_given: bool,
    /// Hex digest over `signer_identity ++ timestamp`, or `unknown`.
    pub integrity_digest: String,
    pub environment: EnvironmentContext,
    /// Weak device correlator. Not a security identifier.
    pub device_fingerprint: String,
    /// Network origin of the request. Left empty here and filled by the
    /// receiving server.
    pub origin_address: String,
}

impl SignatureEvidence {
    /// Return the record with its origin address filled in.
    pub fn with_origin_address(mut self, origin: impl Into<String>) -> Self {
        self.origin_address = origin.into();
        self
    }

    /// Whether the digest was actually computed rather than defaulted.
    pub fn has_verifiable_digest(&self) -> bool {
        !self.integrity_digest.is_empty() && self.integrity_digest != UNKNOWN
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SignatureEvidence {
        SignatureEvidence {
            timestamp: "2026-03-01T09:30:00.000Z".into(),
            signer_identity: "Jane Doe".into(),
            consent_given: true,
            integrity_digest: "ab".repeat(32),
            environment: EnvironmentContext {
                user_agent: "Mozilla/5.0".into(),
                screen_width: 1920,
                screen_height: 1080,
                timezone: "Europe/London".into(),
            },
            device_fingerprint: "en-GB|MacIntel|0|2073600".into(),
            origin_address: String::new(),
        }
    }

    #[test]
    fn origin_is_filled_downstream() {
        let evidence = sample().with_origin_address("203.0.113.7");
        assert_eq!(evidence.origin_address, "203.0.113.7");
        assert_eq!(evidence.signer_identity, "Jane Doe");
    }

    #[test]
    fn sentinel_digest_is_not_verifiable() {
        let mut evidence = sample();
        assert!(evidence.has_verifiable_digest());
        evidence.integrity_digest = UNKNOWN.into();
        assert!(!evidence.has_verifiable_digest());
    }

    #[test]
    fn json_hand_off_preserves_record() {
        let evidence = sample();
        let json = evidence.to_json().unwrap();
        assert!(json.contains("\"consent_given\":true"));
        assert_eq!(SignatureEvidence::from_json(&json).unwrap(), evidence);
    }

    #[test]
    fn default_environment_is_unknown() {
        let env = EnvironmentContext::default();
        assert_eq!(env.user_agent, UNKNOWN);
        assert_eq!(env.screen_resolution(), "0x0");
    }
}
