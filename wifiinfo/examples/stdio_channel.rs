//! Serves the `wifiInfo` channel on stdin/stdout, one JSON call per line.
//!
//! ```text
//! $ echo '{"method":"getWifiInfo"}' | cargo run --example stdio_channel
//! {"status":"success","result":{"level":66,"rssi":-70,"ssid":"HomeNet"}}
//! ```
use tokio::io::{self, BufReader};
use wifiinfo::{ConnectionInfoReader, WifiInfoChannel};

#[tokio::main]
async fn main() -> wifiinfo::Result<()> {
    let channel = WifiInfoChannel::new(ConnectionInfoReader::system().await?);
    wifiinfo::serve(&channel, BufReader::new(io::stdin()), io::stdout()).await
}
