//! NetworkManager Device proxy.

use zbus::{Result, proxy};

/// Proxy for NetworkManager device interface.
#[proxy(
    interface = "org.freedesktop.NetworkManager.Device",
    default_service = "org.freedesktop.NetworkManager"
)]
pub trait NMDevice {
    /// The network interface name (e.g., "wlan0").
    #[zbus(property)]
    fn interface(&self) -> Result<String>;

    /// Device type as a numeric code (2 = Wi-Fi).
    #[zbus(property)]
    fn device_type(&self) -> Result<u32>;
}
