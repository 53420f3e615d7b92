//! NetworkManager Wireless Device proxy.

use zbus::{Result, proxy};
use zvariant::OwnedObjectPath;

/// Proxy for wireless device interface.
#[proxy(
    interface = "org.freedesktop.NetworkManager.Device.Wireless",
    default_service = "org.freedesktop.NetworkManager"
)]
pub trait NMWireless {
    /// Path to the currently connected access point ("/" if none).
    #[zbus(property)]
    fn active_access_point(&self) -> Result<OwnedObjectPath>;
}
