//! Error types for the relay.

use thiserror::Error;

/// Errors that can occur while setting up the relay.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Serial port error.
    #[error("serial port error: {0}")]
    Serial(#[from] tokio_serial::Error),
}
