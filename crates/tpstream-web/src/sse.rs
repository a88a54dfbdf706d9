//! Server-Sent Events for live readings.

use std::convert::Infallible;

use axum::response::sse::{Event, KeepAlive, Sse};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;

/// Event name readings are delivered under.
pub const READING_EVENT: &str = "tps";

/// Create an SSE stream of [`READING_EVENT`] events from a broadcast channel.
///
/// The receiver subscribes at connect time, so a client only sees values
/// broadcast after it arrived; there is no replay buffer. Lagged receivers
/// skip the values they missed rather than erroring out.
pub fn create_reading_stream(
    rx: tokio::sync::broadcast::Receiver<f64>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>>> {
    let stream =
        BroadcastStream::new(rx).filter_map(|result: Result<f64, BroadcastStreamRecvError>| {
            result
                .ok()
                .map(|value| Ok(Event::default().event(READING_EVENT).data(value.to_string())))
        });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
