// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sensitive field codec — base64 over UTF-8 for values in transit.
//
// Two API levels:
//   try_encode / try_decode  explicit Result, no logging
//   encode / decode          fail-open: on error, log once and echo the input

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use sigform_core::config::{CodecConfig, SigformConfig};
use sigform_core::error::{Result, SigformError};
use tracing::{debug, error, instrument};

/// Sensitive field detection and reversible transport encoding.
#[derive(Debug, Clone)]
pub struct SensitiveFieldCodec {
    /// Lowercased name fragments.
    sensitive_fields: Vec<String>,
}

impl Default for SensitiveFieldCodec {
    fn default() -> Self {
        Self::new(&CodecConfig::default())
    }
}

impl SensitiveFieldCodec {
    pub fn new(config: &CodecConfig) -> Self {
        Self {
            sensitive_fields: config
                .sensitive_fields
                .iter()
                .map(|f| f.to_lowercase())
                .filter(|f| !f.is_empty())
                .collect(),
        }
    }

    /// Codec using the codec section of a pipeline config.
    pub fn from_config(config: &SigformConfig) -> Self {
        Self::new(&config.codec)
    }

    /// Whether `field_name` contains any sensitive fragment, ignoring case.
    pub fn is_sensitive(&self, field_name: &str) -> bool {
        let name = field_name.to_lowercase();
        self.sensitive_fields
            .iter()
            .any(|fragment| name.contains(fragment.as_str()))
    }

    /// Encode `value` for transport, or explain why it cannot be.
    ///
    /// Values containing control characters other than tab, line feed and
    /// carriage return are refused with `UnsupportedCharacter`, even though
    /// base64 could carry them. A NUL or form feed inside an identifier
    /// means the input is corrupt, and the caller must clean or reject it
    /// rather than ship an obfuscated copy of bad data.
    pub fn try_encode(&self, value: &str) -> Result<String> {
        check_supported(value)?;
        Ok(BASE64.encode(value.as_bytes()))
    }

    /// Reverse [`try_encode`](Self::try_encode).
    pub fn try_decode(&self, encoded: &str) -> Result<String> {
        let bytes = BASE64
            .decode(encoded.as_bytes())
            .map_err(|e| SigformError::MalformedEncoding(e.to_string()))?;
        let value =
            String::from_utf8(bytes).map_err(|e| SigformError::MalformedEncoding(e.to_string()))?;
        check_supported(&value)?;
        Ok(value)
    }

    /// Encode `value` for transport.
    ///
    /// Never fails. If the value cannot be encoded an error is logged and
    /// `value` is returned unchanged, so a result equal to the input means
    /// the transform did NOT apply. Use [`try_encode`](Self::try_encode)
    /// to get the reason instead.
    ///
    /// The refused inputs are exactly those [`try_encode`](Self::try_encode)
    /// rejects, so a value holding a stray control character is echoed in
    /// plaintext. Callers that must never transmit plaintext check
    /// `encode(v) != v`, or use `try_encode` and block the submission.
    #[instrument(skip_all, fields(len = value.len()))]
    pub fn encode(&self, value: &str) -> String {
        match self.try_encode(value) {
            Ok(encoded) => {
                debug!("value encoded");
                encoded
            }
            Err(e) => {
                error!(error = %e, "encoding failed, value passed through unencoded");
                value.to_owned()
            }
        }
    }

    /// Decode a value produced by [`encode`](Self::encode).
    ///
    /// Same fail-open contract: on failure the input is logged as
    /// undecodable and returned unchanged.
    #[instrument(skip_all, fields(len = encoded.len()))]
    pub fn decode(&self, encoded: &str) -> String {
        match self.try_decode(encoded) {
            Ok(value) => {
                debug!("value decoded");
                value
            }
            Err(e) => {
                error!(error = %e, "decoding failed, value passed through undecoded");
                encoded.to_owned()
            }
        }
    }
}

/// Form values may hold any Unicode except control characters; tab and
/// line breaks are the exceptions multi-line inputs legitimately carry.
fn is_supported(ch: char) -> bool {
    !ch.is_control() || matches!(ch, '\t' | '\n' | '\r')
}

fn check_supported(value: &str) -> Result<()> {
    match value.chars().enumerate().find(|(_, ch)| !is_supported(*ch)) {
        Some((position, ch)) => Err(SigformError::UnsupportedCharacter {
            codepoint: u32::from(ch),
            position,
        }),
        None => Ok(()),
    }
}
