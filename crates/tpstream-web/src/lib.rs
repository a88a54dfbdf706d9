//! Live readings web UI for tpstream.
//!
//! This crate provides the browser-facing half of the relay:
//! - Server-Sent Events endpoint fanning readings out to every viewer
//! - Static asset serving for the prebuilt dashboard
//! - Health endpoint

mod routes;
mod sse;

pub use routes::create_router;
pub use sse::READING_EVENT;
