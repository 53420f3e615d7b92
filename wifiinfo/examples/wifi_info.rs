use wifiinfo::{ConnectionInfoReader, MethodCall, WifiInfoChannel};

#[tokio::main]
async fn main() -> wifiinfo::Result<()> {
    let reader = ConnectionInfoReader::system().await?;

    let info = reader.get_connection_info().await?;
    if info.is_connected() {
        println!("{:30} {} dBm  level {}", info.ssid, info.rssi, info.level);
    } else {
        println!("Not connected to a Wi-Fi network");
    }

    // The same read, as the UI layer sees it
    let channel = WifiInfoChannel::new(reader);
    let response = channel.handle(&MethodCall::new("getWifiInfo")).await;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
