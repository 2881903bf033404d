// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Host environment — reads the signing context from the running process
// when Sigform is embedded in a native application rather than a browser.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Local, Utc};

use crate::traits::{Clock, EnvironmentProvider};

/// Environment observed from the process: locale and timezone variables,
/// the local UTC offset, and the OS/architecture pair. A native host has
/// no display geometry to report.
///
/// Nothing is cached. Every read goes back to the lookup and the local
/// clock, so a long-lived provider reports the environment as it is at
/// capture time.
#[derive(Clone)]
pub struct HostEnvironment {
    lookup: Arc<dyn Fn(&str) -> Option<String> + Send + Sync>,
}

impl fmt::Debug for HostEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostEnvironment").finish_non_exhaustive()
    }
}

impl HostEnvironment {
    /// Read from the live process environment.
    pub fn detect() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read from an arbitrary variable lookup, e.g. a shared map.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
        Self {
            lookup: Arc::new(lookup),
        }
    }
}

/// Convert a POSIX locale (`en_GB.UTF-8`) to a BCP 47-style tag (`en-GB`).
/// The `C` and `POSIX` locales carry no language and yield `None`.
fn locale_tag(raw: &str) -> Option<String> {
    let base = raw.split(['.', '@']).next().unwrap_or_default().trim();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    Some(base.replace('_', "-"))
}

impl EnvironmentProvider for HostEnvironment {
    fn user_agent(&self) -> Option<String> {
        Some(format!(
            "{}/{} ({})",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS
        ))
    }

    fn screen_size(&self) -> Option<(u32, u32)> {
        None
    }

    fn timezone(&self) -> Option<String> {
        (self.lookup)("TZ")
            .map(|tz| tz.trim_start_matches(':').to_owned())
            .filter(|tz| !tz.is_empty())
    }

    fn locale(&self) -> Option<String> {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|key| (self.lookup)(*key))
            .find_map(|raw| locale_tag(&raw))
    }

    fn platform(&self) -> Option<String> {
        Some(format!("{} {}", std::env::consts::OS, std::env::consts::ARCH))
    }

    fn timezone_offset_minutes(&self) -> Option<i32> {
        Some(Local::now().offset().local_minus_utc() / 60)
    }
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
