use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::constants::{INVALID_RSSI, MAX_LEVEL, UNKNOWN_SSID, dbus_error};

/// The currently connected Wi-Fi network, as handed to the UI layer.
///
/// Built fresh on every query. Serializes to exactly the mapping
/// `{"ssid": .., "rssi": .., "level": ..}`.
///
/// # Example
///
/// ```rust
/// use wifiinfo::ConnectionInfo;
///
/// let info = ConnectionInfo {
///     ssid: "HomeNet".into(),
///     rssi: -50,
///     level: 99,
/// };
/// assert!(info.is_connected());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionInfo {
    /// Network name with one pair of surrounding quotes removed.
    pub ssid: String,
    /// Received signal strength in dBm.
    pub rssi: i32,
    /// Signal level in `0..=100`.
    pub level: i32,
}

impl ConnectionInfo {
    /// Returns `true` unless the SSID is the unknown-network sentinel.
    pub fn is_connected(&self) -> bool {
        self.ssid != UNKNOWN_SSID
    }
}

/// Connection record exactly as a provider reports it.
///
/// The SSID may still be quote-wrapped; shaping happens in
/// [`ConnectionInfoReader`](crate::ConnectionInfoReader).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawConnectionInfo {
    pub ssid: String,
    pub rssi: i32,
}

impl RawConnectionInfo {
    pub fn new(ssid: impl Into<String>, rssi: i32) -> Self {
        Self {
            ssid: ssid.into(),
            rssi,
        }
    }

    /// The record reported when nothing is associated.
    pub fn disconnected() -> Self {
        Self::new(UNKNOWN_SSID, INVALID_RSSI)
    }
}

/// Reader configuration.
///
/// ```rust
/// use wifiinfo::ReaderConfig;
///
/// let config = ReaderConfig::new().with_max_level(4);
/// assert_eq!(config.max_level(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderConfig {
    max_level: i32,
}

impl ReaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the classifier's maximum level, clamped to `1..=100`.
    pub fn with_max_level(mut self, max_level: i32) -> Self {
        self.max_level = max_level.clamp(1, MAX_LEVEL);
        self
    }

    /// Number of levels the classifier buckets RSSI into, in `1..=100`.
    pub fn max_level(&self) -> i32 {
        self.max_level
    }
}

impl Default for ReaderConfig {
    /// Defaults to a maximum level of 100.
    fn default() -> Self {
        Self {
            max_level: MAX_LEVEL,
        }
    }
}

/// Errors that can occur while reading connection info.
///
/// These originate in the underlying OS read and are surfaced unchanged to
/// the caller of that single read.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WifiInfoError {
    /// A D-Bus communication error occurred.
    #[error("D-Bus error: {0}")]
    Dbus(#[from] zbus::Error),

    /// The caller lacks permission to read Wi-Fi state.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// The networking service is not available.
    #[error("networking service unavailable: {0}")]
    Unavailable(String),

    /// Reading from or writing to a channel transport failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A channel message could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WifiInfoError {
    /// Stable snake_case code used in channel error responses.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Dbus(err) => match dbus_error_name(err) {
                Some(dbus_error::ACCESS_DENIED) => "permission_denied",
                Some(dbus_error::SERVICE_UNKNOWN | dbus_error::NAME_HAS_NO_OWNER) => "unavailable",
                _ => "dbus_error",
            },
            Self::PermissionDenied(_) => "permission_denied",
            Self::Unavailable(_) => "unavailable",
            Self::Io(_) => "io_error",
            Self::Json(_) => "json_error",
        }
    }
}

fn dbus_error_name(err: &zbus::Error) -> Option<&str> {
    match err {
        zbus::Error::MethodError(name, _, _) => Some(name.as_str()),
        zbus::Error::FDO(fdo) => match **fdo {
            zbus::fdo::Error::AccessDenied(_) => Some(dbus_error::ACCESS_DENIED),
            zbus::fdo::Error::ServiceUnknown(_) => Some(dbus_error::SERVICE_UNKNOWN),
            zbus::fdo::Error::NameHasNoOwner(_) => Some(dbus_error::NAME_HAS_NO_OWNER),
            _ => None,
        },
        _ => None,
    }
}
