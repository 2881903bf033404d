// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Device fingerprint: a low-entropy correlator, never an identifier.

use sigform_bridge::EnvironmentSnapshot;

/// `locale|platform|tz_offset_minutes|display_area`.
pub fn device_fingerprint(env: &EnvironmentSnapshot) -> String {
    let display_area = u64::from(env.screen_width) * u64::from(env.screen_height);
    format!(
        "{}|{}|{}|{}",
        env.locale, env.platform, env.timezone_offset_minutes, display_area
    )
}
