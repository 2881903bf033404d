// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for the signing environment.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sigform_core::UNKNOWN;
use sigform_core::error::Result;
use tracing::debug;

/// Read-only view of the client environment.
///
/// Every method is best effort: `None` means the value could not be
/// observed, and callers substitute a default rather than failing.
pub trait EnvironmentProvider: Send + Sync {
    /// Client software identifier (user agent string).
    fn user_agent(&self) -> Option<String>;

    /// Display width and height in pixels.
    fn screen_size(&self) -> Option<(u32, u32)>;

    /// IANA timezone name (e.g. "Europe/London").
    fn timezone(&self) -> Option<String>;

    /// Preferred locale tag (e.g. "en-GB").
    fn locale(&self) -> Option<String>;

    /// Platform string (e.g. "MacIntel", "linux x86_64").
    fn platform(&self) -> Option<String>;

    /// Offset from UTC in minutes, positive east of Greenwich.
    fn timezone_offset_minutes(&self) -> Option<i32>;
}

/// One-way digest primitive.
///
/// Asynchronous because browser-style digest APIs are; implementations
/// backed by a local hash simply return immediately.
#[async_trait]
pub trait DigestProvider: Send + Sync {
    /// Algorithm name, for diagnostics (e.g. "SHA-256").
    fn algorithm(&self) -> &str;

    /// Digest `data` and return the raw output bytes.
    async fn digest(&self, data: &[u8]) -> Result<Vec<u8>>;
}

/// Source of the capture instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Environment values read at a single instant with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentSnapshot {
    pub user_agent: String,
    pub screen_width: u32,
    pub screen_height: u32,
    pub timezone: String,
    pub locale: String,
    pub platform: String,
    pub timezone_offset_minutes: i32,
}

/// Read every environment value once, substituting `unknown` / `0` for
/// anything the provider could not observe.
pub fn snapshot(provider: &dyn EnvironmentProvider) -> EnvironmentSnapshot {
    let mut missing: Vec<&str> = Vec::new();

    let mut text = |name: &'static str, value: Option<String>| match value {
        Some(v) if !v.is_empty() => v,
        _ => {
            missing.push(name);
            UNKNOWN.to_owned()
        }
    };

    let user_agent = text("user_agent", provider.user_agent());
    let timezone = text("timezone", provider.timezone());
    let locale = text("locale", provider.locale());
    let platform = text("platform", provider.platform());

    let (screen_width, screen_height) = provider.screen_size().unwrap_or_else(|| {
        missing.push("screen_size");
        (0, 0)
    });
    let timezone_offset_minutes = provider.timezone_offset_minutes().unwrap_or_else(|| {
        missing.push("timezone_offset");
        0
    });

    if !missing.is_empty() {
        debug!(?missing, "environment values defaulted");
    }

    EnvironmentSnapshot {
        user_agent,
        screen_width,
        screen_height,
        timezone,
        locale,
        platform,
        timezone_offset_minutes,
    }
}
