// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Form-level sweep: encode every sensitive field of a submission in place.

use std::collections::BTreeMap;

use tracing::{info, instrument, warn};

use crate::codec::SensitiveFieldCodec;

/// Which fields a sweep touched. Only names are recorded, never values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSweep {
    /// Sensitive fields whose values were replaced by their encoding.
    pub encoded: Vec<String>,
    /// Sensitive fields left as-is because they could not be encoded.
    pub failed: Vec<String>,
}

impl FieldSweep {
    /// True when every sensitive field was encoded.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

impl SensitiveFieldCodec {
    /// Encode the value of every sensitive field in `fields`.
    ///
    /// Fields that cannot be encoded keep their original value and are
    /// listed in [`FieldSweep::failed`], so the caller can decide whether
    /// to block the submission.
    #[instrument(skip_all, fields(fields = fields.len()))]
    pub fn encode_sensitive_fields(&self, fields: &mut BTreeMap<String, String>) -> FieldSweep {
        let mut sweep = FieldSweep::default();

        for (name, value) in fields.iter_mut() {
            if !self.is_sensitive(name) {
                continue;
            }
            match self.try_encode(value) {
                Ok(encoded) => {
                    *value = encoded;
                    sweep.encoded.push(name.clone());
                }
                Err(e) => {
                    warn!(field = %name, error = %e, "sensitive field left unencoded");
                    sweep.failed.push(name.clone());
                }
            }
        }

        info!(
            encoded = sweep.encoded.len(),
            failed = sweep.failed.len(),
            "sensitive field sweep complete"
        );
        sweep
    }
}
