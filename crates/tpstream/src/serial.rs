//! Serial device access.

use tokio_serial::{SerialPortBuilderExt, SerialStream};
use tracing::info;

use crate::error::RelayError;

/// Open the serial device at `path`.
///
/// Failure here is fatal: the caller exits before the HTTP listener is ever
/// bound. There is no retry or reconnect.
pub fn open(path: &str, baud: u32) -> Result<SerialStream, RelayError> {
    let stream = tokio_serial::new(path, baud).open_native_async()?;
    info!(path, baud, "opened serial device");
    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn open_fails_for_missing_device() {
        assert!(open("/dev/does-not-exist-tpstream", 9600).is_err());
    }
}
