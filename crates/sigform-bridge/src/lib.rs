// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Sigform — Collaborator abstractions for the signing environment.
//!
//! Evidence capture needs three things it must not reach for globally: a
//! view of the client environment, a one-way digest primitive, and a clock.
//! This crate defines those capabilities as traits and ships a host
//! implementation plus fixed/unavailable variants for callers that gather
//! the data elsewhere (e.g. a browser front end) and for tests.

pub mod host;
pub mod stub;
pub mod traits;

pub use host::{HostEnvironment, SystemClock};
pub use stub::{FixedClock, StaticEnvironment, UnavailableDigest};
pub use traits::{Clock, DigestProvider, EnvironmentProvider, EnvironmentSnapshot, snapshot};

/// Returns the environment provider for the running host.
pub fn host_environment() -> Box<dyn EnvironmentProvider> {
    Box::new(HostEnvironment::detect())
}
