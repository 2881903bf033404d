// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fixed and unavailable collaborators.
//
// `StaticEnvironment` carries values gathered elsewhere (a browser front end
// posting navigator/screen data, or a test). `UnavailableDigest` stands in
// for a client without a digest primitive.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sigform_core::error::{Result, SigformError};

use crate::traits::{Clock, DigestProvider, EnvironmentProvider};

/// Environment with caller-supplied values. `None` fields are reported as
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticEnvironment {
    pub user_agent: Option<String>,
    pub screen_size: Option<(u32, u32)>,
    pub timezone: Option<String>,
    pub locale: Option<String>,
    pub platform: Option<String>,
    pub timezone_offset_minutes: Option<i32>,
}

impl EnvironmentProvider for StaticEnvironment {
    fn user_agent(&self) -> Option<String> {
        self.user_agent.clone()
    }

    fn screen_size(&self) -> Option<(u32, u32)> {
        self.screen_size
    }

    fn timezone(&self) -> Option<String> {
        self.timezone.clone()
    }

    fn locale(&self) -> Option<String> {
        self.locale.clone()
    }

    fn platform(&self) -> Option<String> {
        self.platform.clone()
    }

    fn timezone_offset_minutes(&self) -> Option<i32> {
        self.timezone_offset_minutes
    }
}

/// Digest provider for clients without a digest primitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableDigest;

#[async_trait]
impl DigestProvider for UnavailableDigest {
    fn algorithm(&self) -> &str {
        "none"
    }

    async fn digest(&self, _data: &[u8]) -> Result<Vec<u8>> {
        tracing::warn!("DigestProvider::digest called on unavailable digest");
        Err(SigformError::PlatformUnavailable)
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
