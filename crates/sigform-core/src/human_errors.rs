// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for people filling in a form.
//
// Every technical error is mapped to plain English with a clear suggestion.
// The severity drives whether the form asks the user to act or simply
// tells them to try again later.

use crate::error::SigformError;

/// Severity of an error from the signer's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Something outside the user's control failed; trying again may help.
    Transient,
    /// The user must change what they entered or sign again.
    ActionRequired,
    /// Cannot be fixed by retrying or re-entering data.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown next to the field or signature box).
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
    pub severity: Severity,
}

/// Convert a `SigformError` into a `HumanError` suitable for a form.
pub fn humanize_error(err: &SigformError) -> HumanError {
    match err {
        SigformError::UnsupportedCharacter { position, .. } => HumanError {
            message: "This field contains a character we can't send.".into(),
            suggestion: format!(
                "Remove any hidden or special characters (near position {}) and type the value again.",
                position + 1
            ),
            severity: Severity::ActionRequired,
        },

        SigformError::MalformedEncoding(_) => HumanError {
            message: "A protected value could not be read back.".into(),
            suggestion: "Please enter the value again.".into(),
            severity: Severity::ActionRequired,
        },

        SigformError::DigestUnavailable(_) => HumanError {
            message: "We couldn't seal your signature.".into(),
            suggestion: "Your browser may be blocking security features. Try again, or use a different browser.".into(),
            severity: Severity::Transient,
        },

        SigformError::IntegrityMismatch { .. } => HumanError {
            message: "This signature record has been changed since it was signed.".into(),
            suggestion: "Please sign the form again.".into(),
            severity: Severity::ActionRequired,
        },

        SigformError::PlatformUnavailable => HumanError {
            message: "This feature isn't available on your device.".into(),
            suggestion: "Try again from an up-to-date web browser.".into(),
            severity: Severity::Permanent,
        },

        SigformError::Serialization(_) => HumanError {
            message: "The form had an internal data problem.".into(),
            suggestion: "Try again. If this keeps happening, please contact support.".into(),
            severity: Severity::Permanent,
        },
    }
}
