//! The seam between the reader and the OS networking service.

use async_trait::async_trait;

use crate::Result;
use crate::api::models::RawConnectionInfo;

/// Source of the active Wi-Fi connection record.
///
/// Implementations read ambient OS state. When nothing is associated they
/// return [`RawConnectionInfo::disconnected`] rather than an error. Failures
/// of the OS read itself (permission denied, service unavailable) are
/// returned as errors and are not retried.
#[async_trait]
pub trait ConnectionInfoProvider: Send + Sync {
    async fn connection_info(&self) -> Result<RawConnectionInfo>;
}

/// Provider returning the same record on every read.
///
/// ```rust
/// use wifiinfo::{ConnectionInfoReader, StaticProvider};
///
/// # async fn example() -> wifiinfo::Result<()> {
/// let reader = ConnectionInfoReader::new(StaticProvider::new("\"HomeNet\"", -50));
/// assert_eq!(reader.get_connection_info().await?.ssid, "HomeNet");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticProvider {
    info: RawConnectionInfo,
}

impl StaticProvider {
    pub fn new(ssid: impl Into<String>, rssi: i32) -> Self {
        Self {
            info: RawConnectionInfo::new(ssid, rssi),
        }
    }

    /// A provider that always reports no association.
    pub fn disconnected() -> Self {
        Self {
            info: RawConnectionInfo::disconnected(),
        }
    }
}

impl From<RawConnectionInfo> for StaticProvider {
    fn from(info: RawConnectionInfo) -> Self {
        Self { info }
    }
}

#[async_trait]
impl ConnectionInfoProvider for StaticProvider {
    async fn connection_info(&self) -> Result<RawConnectionInfo> {
        Ok(self.info.clone())
    }
}
