//! Utility functions for Wi-Fi data conversion.
//!
//! Provides helpers for shaping what the OS reports: SSID bytes to strings,
//! quote stripping, and NetworkManager strength percentages to dBm.

use log::warn;
use std::borrow::Cow;
use std::str;

use crate::types::constants::{UNKNOWN_SSID, strength};

/// Removes one pair of surrounding `"` characters, if present.
///
/// The string must both start and end with a quote and be at least two
/// characters long; otherwise it is returned unchanged. Embedded quotes are
/// left alone.
pub(crate) fn strip_surrounding_quotes(ssid: &str) -> &str {
    if ssid.len() >= 2 && ssid.starts_with('"') && ssid.ends_with('"') {
        &ssid[1..ssid.len() - 1]
    } else {
        ssid
    }
}

/// Decode SSID bytes, defaulting to the unknown-network sentinel if empty or
/// invalid UTF-8.
pub(crate) fn decode_ssid_or_unknown(bytes: &[u8]) -> Cow<'static, str> {
    if bytes.is_empty() {
        return Cow::Borrowed(UNKNOWN_SSID);
    }

    match str::from_utf8(bytes) {
        Ok(s) => Cow::Owned(s.to_owned()),
        Err(e) => {
            warn!("Invalid UTF-8 in SSID: {e}");
            Cow::Borrowed(UNKNOWN_SSID)
        }
    }
}

/// Converts a NetworkManager strength percentage back to dBm.
///
/// Inverse of NetworkManager's `100 - |dBm + 40| * 100 / 60` over its
/// `-100..=-40` window, so the result lies in `-100..=-40`.
pub(crate) fn strength_to_dbm(percent: u8) -> i32 {
    i32::from(percent.min(strength::MAX_PERCENT)) * strength::DBM_SPAN
        / i32::from(strength::MAX_PERCENT)
        + strength::DBM_FLOOR
}

/// Macro to convert Result to Option with error logging.
/// Usage: `try_log!(result, "context message")`
#[macro_export]
macro_rules! try_log {
    ($result:expr, $context:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => {
                log::warn!("{}: {:?}", $context, e);
                return None;
            }
        }
    };
}
