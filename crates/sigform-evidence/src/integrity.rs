// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Signature integrity: what the digest covers, and the in-process SHA-256
// provider used when the client has no digest primitive of its own.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use sigform_bridge::DigestProvider;
use sigform_core::error::Result;

/// The bytes an integrity digest covers: the signature followed directly by
/// the capture timestamp.
pub(crate) fn integrity_input(signer_identity: &str, timestamp: &str) -> Vec<u8> {
    let mut input = Vec::with_capacity(signer_identity.len() + timestamp.len());
    input.extend_from_slice(signer_identity.as_bytes());
    input.extend_from_slice(timestamp.as_bytes());
    input
}

/// In-process SHA-256 digest provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Digest;

#[async_trait]
impl DigestProvider for Sha256Digest {
    fn algorithm(&self) -> &str {
        "SHA-256"
    }

    async fn digest(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(Sha256::digest(data).to_vec())
    }
}
