//! Current Wi-Fi connection info over a single-method channel.
//!
//! This crate answers one question for an application UI layer: which Wi-Fi
//! network is the machine on, and how strong is the signal? It returns:
//!
//! - the SSID, with any surrounding quote characters removed
//! - the RSSI in dBm, as reported by the OS
//! - a signal level in `0..=100`, derived from the RSSI
//!
//! # Example
//!
//! ```no_run
//! use wifiinfo::ConnectionInfoReader;
//!
//! # async fn example() -> wifiinfo::Result<()> {
//! let reader = ConnectionInfoReader::system().await?;
//! let info = reader.get_connection_info().await?;
//! println!("{} {} dBm (level {})", info.ssid, info.rssi, info.level);
//! # Ok(())
//! # }
//! ```
//!
//! # Method Channel
//!
//! UI layers talk to the reader through [`WifiInfoChannel`], which accepts a
//! [`MethodCall`] by name and answers with a tagged [`MethodResponse`]:
//!
//! ```no_run
//! use wifiinfo::{ConnectionInfoReader, MethodCall, MethodResponse, WifiInfoChannel};
//!
//! # async fn example() -> wifiinfo::Result<()> {
//! let channel = WifiInfoChannel::new(ConnectionInfoReader::system().await?);
//!
//! match channel.handle(&MethodCall::new("getWifiInfo")).await {
//!     MethodResponse::Success { result } => println!("{result}"),
//!     MethodResponse::NotImplemented => println!("not implemented"),
//!     MethodResponse::Error { code, message } => eprintln!("{code}: {message}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Providers
//!
//! The OS read sits behind [`ConnectionInfoProvider`]. On Linux,
//! [`NetworkManagerProvider`] reads the active access point over D-Bus.
//! [`StaticProvider`] returns a fixed record for tests and hosts without a
//! Wi-Fi stack.
//!
//! # Logging
//!
//! This crate uses the [`log`](https://docs.rs/log) facade for logging. To see
//! log output, add a logging implementation like `env_logger`.

// Internal implementation modules
mod core;
mod dbus;
mod types;
mod util;

// Public API modules
pub mod api;

// Re-exported public API
pub use api::channel::{Command, MethodCall, MethodResponse, WifiInfoChannel};
pub use api::models::{ConnectionInfo, RawConnectionInfo, ReaderConfig, WifiInfoError};
pub use api::reader::ConnectionInfoReader;
pub use api::transport::serve;
pub use crate::core::network_manager::NetworkManagerProvider;
pub use crate::core::provider::{ConnectionInfoProvider, StaticProvider};
pub use crate::core::signal::{LinearClassifier, SignalClassifier};
pub use types::constants::{CHANNEL_NAME, INVALID_RSSI, MAX_LEVEL, UNKNOWN_SSID};

/// A specialized `Result` type for Wi-Fi info operations.
pub type Result<T> = std::result::Result<T, WifiInfoError>;
