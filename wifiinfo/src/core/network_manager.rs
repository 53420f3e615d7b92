//! Connection info from NetworkManager over D-Bus.

use async_trait::async_trait;
use log::{debug, warn};
use zbus::Connection;
use zvariant::OwnedObjectPath;

use crate::Result;
use crate::api::models::RawConnectionInfo;
use crate::core::provider::ConnectionInfoProvider;
use crate::dbus::{NMAccessPointProxy, NMDeviceProxy, NMProxy, NMWirelessProxy};
use crate::try_log;
use crate::types::constants::{device_type, path};
use crate::util::utils::{decode_ssid_or_unknown, strength_to_dbm};

/// Reads the active Wi-Fi connection from NetworkManager.
///
/// The first Wi-Fi device with an active access point wins. With Wi-Fi
/// disabled, no Wi-Fi device, or no association, the disconnected record is
/// returned. NetworkManager only exposes a strength percentage, so the RSSI
/// is recovered from it and lies between -100 and -40 dBm.
///
/// `NetworkManagerProvider` is `Clone`; clones share the same D-Bus
/// connection.
#[derive(Debug, Clone)]
pub struct NetworkManagerProvider {
    conn: Connection,
}

impl NetworkManagerProvider {
    /// Creates a provider connected to the system D-Bus.
    pub async fn new() -> Result<Self> {
        let conn = Connection::system().await?;
        Ok(Self { conn })
    }

    /// Creates a provider on an existing connection.
    pub fn with_connection(conn: Connection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl ConnectionInfoProvider for NetworkManagerProvider {
    async fn connection_info(&self) -> Result<RawConnectionInfo> {
        read_active_connection(&self.conn).await
    }
}

/// The NetworkManager properties the provider reads.
#[async_trait]
pub(crate) trait NetworkManagerBus: Send + Sync {
    async fn wireless_enabled(&self) -> Result<bool>;
    async fn devices(&self) -> Result<Vec<OwnedObjectPath>>;
    async fn device_type(&self, device: &OwnedObjectPath) -> Result<u32>;
    async fn interface(&self, device: &OwnedObjectPath) -> Result<String>;
    async fn active_access_point(&self, device: &OwnedObjectPath) -> Result<OwnedObjectPath>;
    /// Returns the raw SSID bytes and strength percentage of `ap`.
    async fn access_point(&self, ap: &OwnedObjectPath) -> Result<(Vec<u8>, u8)>;
}

#[async_trait]
impl NetworkManagerBus for Connection {
    async fn wireless_enabled(&self) -> Result<bool> {
        Ok(NMProxy::new(self).await?.wireless_enabled().await?)
    }

    async fn devices(&self) -> Result<Vec<OwnedObjectPath>> {
        Ok(NMProxy::new(self).await?.get_devices().await?)
    }

    async fn device_type(&self, device: &OwnedObjectPath) -> Result<u32> {
        let dev = NMDeviceProxy::builder(self)
            .path(device.clone())?
            .build()
            .await?;
        Ok(dev.device_type().await?)
    }

    async fn interface(&self, device: &OwnedObjectPath) -> Result<String> {
        let dev = NMDeviceProxy::builder(self)
            .path(device.clone())?
            .build()
            .await?;
        Ok(dev.interface().await?)
    }

    async fn active_access_point(&self, device: &OwnedObjectPath) -> Result<OwnedObjectPath> {
        let wifi = NMWirelessProxy::builder(self)
            .path(device.clone())?
            .build()
            .await?;
        Ok(wifi.active_access_point().await?)
    }

    async fn access_point(&self, ap: &OwnedObjectPath) -> Result<(Vec<u8>, u8)> {
        let ap = NMAccessPointProxy::builder(self)
            .path(ap.clone())?
            .build()
            .await?;
        Ok((ap.ssid().await?, ap.strength().await?))
    }
}

/// Reads the active access point of the first associated Wi-Fi device.
pub(crate) async fn read_active_connection<B>(bus: &B) -> Result<RawConnectionInfo>
where
    B: NetworkManagerBus + ?Sized,
{
    if !bus.wireless_enabled().await? {
        debug!("Wi-Fi is disabled, reporting disconnected");
        return Ok(RawConnectionInfo::disconnected());
    }

    let Some(ap_path) = active_access_point(bus).await? else {
        debug!("No active access point, reporting disconnected");
        return Ok(RawConnectionInfo::disconnected());
    };

    let (ssid_bytes, strength) = bus.access_point(&ap_path).await?;
    let ssid = decode_ssid_or_unknown(&ssid_bytes);
    Ok(RawConnectionInfo::new(ssid, strength_to_dbm(strength)))
}

async fn active_access_point<B>(bus: &B) -> Result<Option<OwnedObjectPath>>
where
    B: NetworkManagerBus + ?Sized,
{
    for dp in bus.devices().await? {
        let Some(interface) = wifi_interface(bus, &dp).await else {
            continue;
        };

        let active_ap = bus.active_access_point(&dp).await?;
        if active_ap.as_str() != path::NONE {
            debug!("Using active access point {} on {interface}", active_ap.as_str());
            return Ok(Some(active_ap));
        }
    }
    Ok(None)
}

/// Returns the interface name if the device at `dp` is a Wi-Fi device.
///
/// Devices whose type cannot be read are skipped with a warning.
async fn wifi_interface<B>(bus: &B, dp: &OwnedObjectPath) -> Option<String>
where
    B: NetworkManagerBus + ?Sized,
{
    let dev_type = try_log!(bus.device_type(dp).await, "Failed to get device type");
    if dev_type != device_type::WIFI {
        return None;
    }

    match bus.interface(dp).await {
        Ok(interface) => Some(interface),
        Err(e) => {
            warn!("Failed to get interface name of {}: {e}", dp.as_str());
            Some(dp.as_str().to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WifiInfoError;
    use crate::types::constants::{INVALID_RSSI, UNKNOWN_SSID};

    const ETHERNET: u32 = 1;

    struct FakeDevice {
        path: &'static str,
        kind: Option<u32>,
        active_ap: &'static str,
    }

    struct FakeAccessPoint {
        path: &'static str,
        ssid: &'static [u8],
        strength: u8,
    }

    #[derive(Default)]
    struct FakeBus {
        wireless_disabled: bool,
        devices: Vec<FakeDevice>,
        access_points: Vec<FakeAccessPoint>,
        fail_devices: bool,
        fail_interface: bool,
    }

    fn dbus_failure() -> WifiInfoError {
        WifiInfoError::Dbus(zbus::Error::InvalidReply)
    }

    fn object_path(p: &str) -> OwnedObjectPath {
        OwnedObjectPath::try_from(p).unwrap()
    }

    impl FakeBus {
        fn device(&self, dp: &OwnedObjectPath) -> Result<&FakeDevice> {
            self.devices
                .iter()
                .find(|d| d.path == dp.as_str())
                .ok_or_else(dbus_failure)
        }
    }

    #[async_trait]
    impl NetworkManagerBus for FakeBus {
        async fn wireless_enabled(&self) -> Result<bool> {
            Ok(!self.wireless_disabled)
        }

        async fn devices(&self) -> Result<Vec<OwnedObjectPath>> {
            if self.fail_devices {
                return Err(dbus_failure());
            }
            Ok(self.devices.iter().map(|d| object_path(d.path)).collect())
        }

        async fn device_type(&self, device: &OwnedObjectPath) -> Result<u32> {
            self.device(device)?.kind.ok_or_else(dbus_failure)
        }

        async fn interface(&self, device: &OwnedObjectPath) -> Result<String> {
            if self.fail_interface {
                return Err(dbus_failure());
            }
            Ok(self.device(device)?.path.trim_start_matches("/dev/").to_string())
        }

        async fn active_access_point(&self, device: &OwnedObjectPath) -> Result<OwnedObjectPath> {
            let dev = self.device(device)?;
            if dev.kind != Some(device_type::WIFI) {
                panic!("{} is not a Wi-Fi device", dev.path);
            }
            Ok(object_path(dev.active_ap))
        }

        async fn access_point(&self, ap: &OwnedObjectPath) -> Result<(Vec<u8>, u8)> {
            self.access_points
                .iter()
                .find(|a| a.path == ap.as_str())
                .map(|a| (a.ssid.to_vec(), a.strength))
                .ok_or_else(dbus_failure)
        }
    }

    fn wifi(path: &'static str, active_ap: &'static str) -> FakeDevice {
        FakeDevice {
            path,
            kind: Some(device_type::WIFI),
            active_ap,
        }
    }

    fn home_ap() -> FakeAccessPoint {
        FakeAccessPoint {
            path: "/ap/1",
            ssid: b"HomeNet",
            strength: 100,
        }
    }

    fn assert_disconnected(raw: RawConnectionInfo) {
        assert_eq!(raw.ssid, UNKNOWN_SSID);
        assert_eq!(raw.rssi, INVALID_RSSI);
    }

    #[tokio::test]
    async fn test_wifi_disabled_reports_disconnected() {
        let bus = FakeBus {
            wireless_disabled: true,
            fail_devices: true,
            ..Default::default()
        };
        assert_disconnected(read_active_connection(&bus).await.unwrap());
    }

    #[tokio::test]
    async fn test_no_devices_reports_disconnected() {
        let bus = FakeBus::default();
        assert_disconnected(read_active_connection(&bus).await.unwrap());
    }

    #[tokio::test]
    async fn test_non_wifi_devices_are_skipped() {
        let bus = FakeBus {
            devices: vec![FakeDevice {
                path: "/dev/eth0",
                kind: Some(ETHERNET),
                active_ap: "/ap/1",
            }],
            access_points: vec![home_ap()],
            ..Default::default()
        };
        assert_disconnected(read_active_connection(&bus).await.unwrap());
    }

    #[tokio::test]
    async fn test_no_active_access_point_reports_disconnected() {
        let bus = FakeBus {
            devices: vec![wifi("/dev/wlan0", "/")],
            ..Default::default()
        };
        assert_disconnected(read_active_connection(&bus).await.unwrap());
    }

    #[tokio::test]
    async fn test_first_associated_wifi_device_wins() {
        let bus = FakeBus {
            devices: vec![
                FakeDevice {
                    path: "/dev/eth0",
                    kind: Some(ETHERNET),
                    active_ap: "/",
                },
                wifi("/dev/wlan0", "/"),
                wifi("/dev/wlan1", "/ap/1"),
            ],
            access_points: vec![home_ap()],
            ..Default::default()
        };
        let raw = read_active_connection(&bus).await.unwrap();
        assert_eq!(raw, RawConnectionInfo::new("HomeNet", -40));
    }

    #[tokio::test]
    async fn test_unreadable_device_type_is_skipped() {
        let bus = FakeBus {
            devices: vec![
                FakeDevice {
                    path: "/dev/broken",
                    kind: None,
                    active_ap: "/",
                },
                wifi("/dev/wlan0", "/ap/1"),
            ],
            access_points: vec![home_ap()],
            ..Default::default()
        };
        assert_eq!(read_active_connection(&bus).await.unwrap().ssid, "HomeNet");
    }

    #[tokio::test]
    async fn test_unreadable_interface_name_does_not_fail_read() {
        let bus = FakeBus {
            devices: vec![wifi("/dev/wlan0", "/ap/1")],
            access_points: vec![home_ap()],
            fail_interface: true,
            ..Default::default()
        };
        assert_eq!(
            wifi_interface(&bus, &object_path("/dev/wlan0")).await.as_deref(),
            Some("/dev/wlan0")
        );
        let raw = read_active_connection(&bus).await.unwrap();
        assert_eq!(raw, RawConnectionInfo::new("HomeNet", -40));
    }

    #[tokio::test]
    async fn test_empty_ssid_reports_unknown() {
        let bus = FakeBus {
            devices: vec![wifi("/dev/wlan0", "/ap/hidden")],
            access_points: vec![FakeAccessPoint {
                path: "/ap/hidden",
                ssid: b"",
                strength: 50,
            }],
            ..Default::default()
        };
        let raw = read_active_connection(&bus).await.unwrap();
        assert_eq!(raw.ssid, UNKNOWN_SSID);
        assert_eq!(raw.rssi, -70);
    }

    #[tokio::test]
    async fn test_device_listing_failure_propagates() {
        let bus = FakeBus {
            fail_devices: true,
            ..Default::default()
        };
        let err = read_active_connection(&bus).await.unwrap_err();
        assert!(matches!(err, WifiInfoError::Dbus(_)));
    }

    #[tokio::test]
    async fn test_access_point_failure_propagates() {
        let bus = FakeBus {
            devices: vec![wifi("/dev/wlan0", "/ap/vanished")],
            ..Default::default()
        };
        let err = read_active_connection(&bus).await.unwrap_err();
        assert_eq!(err.code(), "dbus_error");
    }
}
