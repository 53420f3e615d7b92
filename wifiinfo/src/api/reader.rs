use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::Result;
use crate::api::models::{ConnectionInfo, RawConnectionInfo, ReaderConfig};
use crate::core::network_manager::NetworkManagerProvider;
use crate::core::provider::ConnectionInfoProvider;
use crate::core::signal::{LinearClassifier, SignalClassifier};
use crate::types::constants::MAX_LEVEL;
use crate::util::utils::strip_surrounding_quotes;

/// Reads the current Wi-Fi connection and shapes it for the UI layer.
///
/// Every call performs one fresh provider read; nothing is cached. The
/// reader holds no mutable state, so clones can be used from any number of
/// tasks at once.
///
/// # Example
///
/// ```rust
/// use wifiinfo::{ConnectionInfoReader, StaticProvider};
///
/// # async fn example() -> wifiinfo::Result<()> {
/// let reader = ConnectionInfoReader::new(StaticProvider::new("\"HomeNet\"", -50));
/// let info = reader.get_connection_info().await?;
///
/// assert_eq!(info.ssid, "HomeNet");
/// assert_eq!(info.rssi, -50);
/// assert_eq!(info.level, 99);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ConnectionInfoReader {
    provider: Arc<dyn ConnectionInfoProvider>,
    classifier: Arc<dyn SignalClassifier>,
    config: ReaderConfig,
}

impl ConnectionInfoReader {
    /// Creates a reader over `provider` using the linear classifier.
    pub fn new(provider: impl ConnectionInfoProvider + 'static) -> Self {
        Self {
            provider: Arc::new(provider),
            classifier: Arc::new(LinearClassifier),
            config: ReaderConfig::default(),
        }
    }

    /// Creates a reader backed by NetworkManager on the system D-Bus.
    pub async fn system() -> Result<Self> {
        Ok(Self::new(NetworkManagerProvider::new().await?))
    }

    /// Replaces the RSSI classifier.
    pub fn with_classifier(mut self, classifier: impl SignalClassifier + 'static) -> Self {
        self.classifier = Arc::new(classifier);
        self
    }

    /// Replaces the reader configuration.
    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Reads the current connection.
    ///
    /// Provider failures are returned unchanged; a failed read has no effect
    /// on later reads.
    pub async fn get_connection_info(&self) -> Result<ConnectionInfo> {
        let raw = self.provider.connection_info().await?;
        Ok(self.shape(raw))
    }

    /// Shapes a raw record: unquotes the SSID and derives the level.
    pub fn shape(&self, raw: RawConnectionInfo) -> ConnectionInfo {
        let max_level = self.config.max_level().clamp(1, MAX_LEVEL);
        let level = self
            .classifier
            .level(raw.rssi, max_level)
            .clamp(0, max_level);
        let ssid = strip_surrounding_quotes(&raw.ssid).to_owned();
        debug!("Read {ssid:?}: {} dBm, level {level}/{max_level}", raw.rssi);

        ConnectionInfo {
            ssid,
            rssi: raw.rssi,
            level,
        }
    }
}

impl fmt::Debug for ConnectionInfoReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionInfoReader")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
