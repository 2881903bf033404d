// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Nine-digit identifier (SSN) validation ahead of transport encoding.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::codec::SensitiveFieldCodec;

/// Number of digits in a valid identifier.
pub const IDENTIFIER_DIGITS: usize = 9;

/// Why an identifier was refused. The `Display` text is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum IdentifierError {
    #[error("SSN is required")]
    Required,

    #[error("SSN must be 9 digits")]
    WrongLength,

    #[error("Invalid SSN format")]
    RepeatedDigits,
}

/// Outcome of the identifier pipeline.
///
/// Either `error` is set and `encoded` is empty, or `error` is `None` and
/// `encoded` holds the transport form of the normalized digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreparedIdentifier {
    pub encoded: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<IdentifierError>,
}

impl PreparedIdentifier {
    fn rejected(error: IdentifierError) -> Self {
        Self {
            encoded: String::new(),
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Strip every character that is not an ASCII digit.
pub fn normalize_identifier(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

impl SensitiveFieldCodec {
    /// Validate, normalize, and encode a nine-digit identifier.
    ///
    /// Never fails; validation problems come back in
    /// [`PreparedIdentifier::error`].
    #[instrument(skip_all)]
    pub fn prepare_identifier_for_transmission(&self, raw: &str) -> PreparedIdentifier {
        if raw.is_empty() {
            return PreparedIdentifier::rejected(IdentifierError::Required);
        }

        let digits = normalize_identifier(raw);
        if digits.len() != IDENTIFIER_DIGITS {
            debug!(digits = digits.len(), "identifier has wrong length");
            return PreparedIdentifier::rejected(IdentifierError::WrongLength);
        }

        let first = digits.as_bytes()[0];
        if digits.bytes().all(|b| b == first) {
            debug!("identifier is a repeated digit");
            return PreparedIdentifier::rejected(IdentifierError::RepeatedDigits);
        }

        PreparedIdentifier {
            encoded: self.encode(&digits),
            error: None,
        }
    }
}
