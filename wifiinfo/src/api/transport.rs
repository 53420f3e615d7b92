//! Line-delimited JSON transport for the method channel.

use log::{debug, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::Result;
use crate::api::channel::{MethodCall, MethodResponse, WifiInfoChannel};

/// Serves `channel` over a line-oriented byte stream.
///
/// Each input line is one JSON [`MethodCall`]; each output line is the JSON
/// [`MethodResponse`] to it, in order. Blank lines are skipped. A line that
/// does not parse gets a `bad_request` error response and the loop carries
/// on. Returns `Ok(())` at end of input; I/O errors end the loop.
///
/// # Example
///
/// ```no_run
/// use tokio::io::{self, BufReader};
/// use wifiinfo::{ConnectionInfoReader, WifiInfoChannel};
///
/// # async fn example() -> wifiinfo::Result<()> {
/// let channel = WifiInfoChannel::new(ConnectionInfoReader::system().await?);
/// wifiinfo::serve(&channel, BufReader::new(io::stdin()), io::stdout()).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve<R, W>(channel: &WifiInfoChannel, reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<MethodCall>(trimmed) {
            Ok(call) => channel.handle(&call).await,
            Err(e) => {
                warn!("Rejecting malformed call: {e}");
                MethodResponse::Error {
                    code: "bad_request".to_string(),
                    message: e.to_string(),
                }
            }
        };

        let mut out = serde_json::to_string(&response)?;
        out.push('\n');
        writer.write_all(out.as_bytes()).await?;
        writer.flush().await?;
    }

    debug!("Channel input closed");
    Ok(())
}
