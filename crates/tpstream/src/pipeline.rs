//! The read/parse/broadcast pipeline.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::reading::Reading;

/// Pump lines from `reader` into the broadcast channel until the stream ends.
///
/// Malformed lines are logged and skipped; one bad line never halts the
/// pipeline and never reaches a client. Returns when the device stops
/// producing bytes or the read fails.
pub async fn pump_lines<R>(reader: R, readings_tx: broadcast::Sender<f64>)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => handle_line(&line, &readings_tx),
            Ok(None) => {
                info!("serial stream ended");
                return;
            }
            Err(e) => {
                warn!(error = %e, "serial read error, stopping pipeline");
                return;
            }
        }
    }
}

fn handle_line(line: &str, readings_tx: &broadcast::Sender<f64>) {
    match Reading::parse(line) {
        Ok(reading) => {
            if let Err(e) = readings_tx.send(reading.value) {
                debug!(error = %e, "no subscribers");
            }
        }
        Err(e) => {
            warn!(line = %line, error = %e, "discarding unparseable line");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tokio::sync::broadcast::error::RecvError;

    #[tokio::test]
    async fn broadcasts_good_lines_in_order_and_skips_bad_ones() {
        let (tx, mut rx) = broadcast::channel(16);
        let input: &[u8] = b"500\nnot json\n{}\n1000\n";

        pump_lines(input, tx).await;

        assert_eq!(rx.recv().await.unwrap(), 50.0);
        assert_eq!(rx.recv().await.unwrap(), 100.0);
        // Sender dropped when the pump finished; nothing else was broadcast.
        assert!(matches!(rx.recv().await, Err(RecvError::Closed)));
    }

    #[tokio::test]
    async fn malformed_only_input_broadcasts_nothing() {
        let (tx, mut rx) = broadcast::channel(16);
        let input: &[u8] = b"not json\n\"500\"\n[1,2]\n";

        pump_lines(input, tx).await;

        assert!(matches!(rx.recv().await, Err(RecvError::Closed)));
    }

    #[tokio::test]
    async fn broadcasting_without_subscribers_is_not_an_error() {
        let (tx, rx) = broadcast::channel(16);
        drop(rx);

        pump_lines(&b"500\n"[..], tx).await;
    }

    #[tokio::test]
    async fn empty_stream_ends_cleanly() {
        let (tx, _rx) = broadcast::channel(16);

        pump_lines(&b""[..], tx).await;
    }
}
