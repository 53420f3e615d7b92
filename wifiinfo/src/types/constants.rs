//! Constants for NetworkManager D-Bus values and signal classification.

/// Channel name the UI layer registers its method calls under.
pub const CHANNEL_NAME: &str = "wifiInfo";

/// SSID reported when no network is associated.
pub const UNKNOWN_SSID: &str = "<unknown ssid>";

/// RSSI reported when no network is associated.
pub const INVALID_RSSI: i32 = -127;

/// Upper bound of the derived signal level.
pub const MAX_LEVEL: i32 = 100;

/// NetworkManager device type constants.
pub mod device_type {
    pub const WIFI: u32 = 2;
}

/// NetworkManager D-Bus object paths.
pub mod path {
    /// Placeholder path NetworkManager uses for "no object".
    pub const NONE: &str = "/";
}

/// RSSI bounds of the linear signal curve (dBm).
pub mod rssi {
    /// At or below this, the level is 0.
    pub const MIN: i32 = -100;
    /// At or above this, the level is the top bucket.
    pub const MAX: i32 = -55;
}

/// NetworkManager access point strength conversion.
///
/// NetworkManager clamps dBm to `-100..=-40` and reports
/// `Strength = 100 - |dBm + 40| * 100 / 60`.
pub mod strength {
    pub const MAX_PERCENT: u8 = 100;
    pub const DBM_FLOOR: i32 = -100;
    /// Width of the dBm window mapped onto `0..=100`.
    pub const DBM_SPAN: i32 = 60;
}

/// Well-known D-Bus error names.
pub mod dbus_error {
    pub const ACCESS_DENIED: &str = "org.freedesktop.DBus.Error.AccessDenied";
    pub const SERVICE_UNKNOWN: &str = "org.freedesktop.DBus.Error.ServiceUnknown";
    pub const NAME_HAS_NO_OWNER: &str = "org.freedesktop.DBus.Error.NameHasNoOwner";
}
