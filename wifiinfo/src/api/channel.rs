//! The `wifiInfo` method channel.
//!
//! The UI layer sends a [`MethodCall`] naming a method; the channel parses it
//! into a [`Command`], runs the matching handler and answers with a tagged
//! [`MethodResponse`]. Unknown methods are answered with
//! [`MethodResponse::NotImplemented`], which is not an error.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::models::WifiInfoError;
use crate::api::reader::ConnectionInfoReader;
use crate::types::constants::CHANNEL_NAME;

/// Commands understood by the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `getWifiInfo`: read the current SSID, RSSI and level.
    GetWifiInfo,
}

impl Command {
    /// Parses a method name. Returns `None` for unknown methods.
    pub fn from_method(method: &str) -> Option<Self> {
        match method {
            "getWifiInfo" => Some(Self::GetWifiInfo),
            _ => None,
        }
    }

    /// The method name this command is invoked by.
    pub fn method(&self) -> &'static str {
        match self {
            Self::GetWifiInfo => "getWifiInfo",
        }
    }
}

/// An inbound call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    /// A call to `method` with no arguments.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: Value::Null,
        }
    }
}

/// The answer to a [`MethodCall`].
///
/// Serialized with a `status` tag:
///
/// ```json
/// {"status": "success", "result": {"ssid": "HomeNet", "rssi": -50, "level": 99}}
/// {"status": "not_implemented"}
/// {"status": "error", "code": "permission_denied", "message": "..."}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MethodResponse {
    Success { result: Value },
    NotImplemented,
    Error { code: String, message: String },
}

impl MethodResponse {
    /// Builds an error response from a read failure.
    pub fn from_error(err: &WifiInfoError) -> Self {
        Self::Error {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented)
    }
}

/// Dispatches method calls to the connection info reader.
///
/// Each call is independent: the channel holds no mutable state and takes no
/// locks, so it can serve concurrent callers through a shared reference.
#[derive(Debug, Clone)]
pub struct WifiInfoChannel {
    reader: ConnectionInfoReader,
}

impl WifiInfoChannel {
    pub fn new(reader: ConnectionInfoReader) -> Self {
        Self { reader }
    }

    /// The channel name calls are registered under.
    pub fn name(&self) -> &'static str {
        CHANNEL_NAME
    }

    pub fn reader(&self) -> &ConnectionInfoReader {
        &self.reader
    }

    /// Handles one call.
    pub async fn handle(&self, call: &MethodCall) -> MethodResponse {
        match Command::from_method(&call.method) {
            Some(command) => self.dispatch(command).await,
            None => {
                debug!("{CHANNEL_NAME}: method {:?} not implemented", call.method);
                MethodResponse::NotImplemented
            }
        }
    }

    /// Runs the handler for `command`.
    pub async fn dispatch(&self, command: Command) -> MethodResponse {
        debug!("{CHANNEL_NAME}: dispatching {}", command.method());
        match command {
            Command::GetWifiInfo => self.get_wifi_info().await,
        }
    }

    async fn get_wifi_info(&self) -> MethodResponse {
        let result = match self.reader.get_connection_info().await {
            Ok(info) => serde_json::to_value(info).map_err(WifiInfoError::from),
            Err(e) => Err(e),
        };

        match result {
            Ok(result) => MethodResponse::Success { result },
            Err(e) => {
                warn!("{CHANNEL_NAME}: getWifiInfo failed: {e}");
                MethodResponse::from_error(&e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::provider::StaticProvider;
    use serde_json::json;

    fn channel(ssid: &str, rssi: i32) -> WifiInfoChannel {
        WifiInfoChannel::new(ConnectionInfoReader::new(StaticProvider::new(ssid, rssi)))
    }

    #[test]
    fn test_command_from_method() {
        assert_eq!(Command::from_method("getWifiInfo"), Some(Command::GetWifiInfo));
        assert_eq!(Command::from_method("getwifiinfo"), None);
        assert_eq!(Command::from_method("unknownMethod"), None);
        assert_eq!(Command::GetWifiInfo.method(), "getWifiInfo");
    }

    #[test]
    fn test_method_call_arguments_default_to_null() {
        let call: MethodCall = serde_json::from_str(r#"{"method":"getWifiInfo"}"#).unwrap();
        assert_eq!(call, MethodCall::new("getWifiInfo"));
    }

    #[test]
    fn test_response_wire_shape() {
        assert_eq!(
            serde_json::to_value(MethodResponse::NotImplemented).unwrap(),
            json!({"status": "not_implemented"})
        );
        let err = MethodResponse::from_error(&WifiInfoError::PermissionDenied("wifi".into()));
        assert_eq!(
            serde_json::to_value(err).unwrap(),
            json!({
                "status": "error",
                "code": "permission_denied",
                "message": "permission denied: wifi"
            })
        );
    }

    #[tokio::test]
    async fn test_get_wifi_info_success() {
        let response = channel("\"HomeNet\"", -50)
            .handle(&MethodCall::new("getWifiInfo"))
            .await;
        assert_eq!(
            response,
            MethodResponse::Success {
                result: json!({"ssid": "HomeNet", "rssi": -50, "level": 99})
            }
        );
    }

    #[tokio::test]
    async fn test_unknown_method_is_not_implemented() {
        let response = channel("HomeNet", -50)
            .handle(&MethodCall::new("unknownMethod"))
            .await;
        assert!(response.is_not_implemented());
        assert!(!response.is_success());
    }

    #[test]
    fn test_channel_name() {
        assert_eq!(channel("a", -60).name(), "wifiInfo");
    }
}
