// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! sigform-codec — Transport obfuscation for sensitive form fields.
//!
//! Classifies field names as sensitive, validates identifier-like values,
//! and applies a reversible encoding before values leave the client.
//!
//! NOT ENCRYPTION: the encoding only keeps plaintext out of transit logs
//! until the server applies real encryption. It provides no confidentiality.

pub mod codec;
pub mod fields;
pub mod identifier;

pub use codec::SensitiveFieldCodec;
pub use fields::FieldSweep;
pub use identifier::{IDENTIFIER_DIGITS, IdentifierError, PreparedIdentifier, normalize_identifier};
