// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pipeline configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Field-name fragments that mark a form field as sensitive.
pub const DEFAULT_SENSITIVE_FIELDS: &[&str] = &[
    "ssn",
    "socialsecurity",
    "social_security",
    "dob",
    "dateofbirth",
    "date_of_birth",
    "birthdate",
    "birth_date",
];

/// Settings for the whole pre-submission pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SigformConfig {
    pub codec: CodecConfig,
    pub evidence: EvidenceConfig,
}

impl SigformConfig {
    /// Parse a JSON configuration document. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Settings for the sensitive field codec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Case-insensitive fragments; a field is sensitive if its name contains any.
    pub sensitive_fields: Vec<String>,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            sensitive_fields: DEFAULT_SENSITIVE_FIELDS
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
        }
    }
}

/// Settings for signature evidence validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvidenceConfig {
    /// Reject evidence whose integrity digest is the `unknown` sentinel.
    /// Off by default: a missing digest capability must not block signing.
    pub require_verifiable_digest: bool,
    /// Minimum length of the trimmed signature, in characters.
    pub min_signature_chars: usize,
}

impl Default for EvidenceConfig {
    fn default() -> Self {
        Self {
            require_verifiable_digest: false,
            min_signature_chars: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_lenient() {
        let config = SigformConfig::default();
        assert!(!config.evidence.require_verifiable_digest);
        assert_eq!(config.evidence.min_signature_chars, 2);
        assert!(config.codec.sensitive_fields.iter().any(|f| f == "ssn"));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            SigformConfig::from_json(r#"{"evidence":{"require_verifiable_digest":true}}"#)
                .unwrap();
        assert!(config.evidence.require_verifiable_digest);
        assert_eq!(config.evidence.min_signature_chars, 2);
        assert_eq!(config.codec, CodecConfig::default());
    }

    #[test]
    fn custom_sensitive_fields() {
        let config =
            SigformConfig::from_json(r#"{"codec":{"sensitive_fields":["tin"]}}"#).unwrap();
        assert_eq!(config.codec.sensitive_fields, vec!["tin".to_owned()]);
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let err = SigformConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, crate::SigformError::Serialization(_)));
    }
}
