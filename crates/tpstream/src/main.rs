//! tpstream: serial TPS telemetry relay.
//!
//! Reads newline-delimited numeric readings from a serial device, scales
//! them, and fans them out to browser clients over Server-Sent Events,
//! alongside a static asset server for the dashboard.

use clap::Parser;
use miette::Result;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod error;
mod pipeline;
mod reading;
mod serial;

#[derive(Parser)]
#[command(name = "tpstream")]
#[command(about = "Serial TPS telemetry relay", long_about = None)]
struct Cli {
    /// Serial device path
    #[arg(
        long,
        env = "TPSTREAM_DEVICE",
        default_value = "/dev/cu.usbserial-A5069RR4"
    )]
    device: String,

    /// Serial baud rate
    #[arg(long, env = "TPSTREAM_BAUD", default_value = "9600")]
    baud: u32,

    /// HTTP listen port
    #[arg(long, env = "TPSTREAM_PORT", default_value = "3000")]
    port: u16,

    /// Static files directory
    #[arg(long, env = "TPSTREAM_STATIC_DIR", default_value = "public")]
    static_dir: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "tpstream=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // The device must open before anything else; a bad path is fatal and the
    // listener is never bound.
    let port = serial::open(&cli.device, cli.baud).map_err(|e| miette::miette!("{}", e))?;

    let (readings_tx, _) = tokio::sync::broadcast::channel(100);

    let pump_tx = readings_tx.clone();
    tokio::spawn(async move {
        pipeline::pump_lines(BufReader::new(port), pump_tx).await;
    });

    let router = tpstream_web::create_router(readings_tx, &cli.static_dir);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", cli.port))
        .await
        .map_err(|e| miette::miette!("{}", e))?;

    tracing::info!("web server listening on http://0.0.0.0:{}", cli.port);

    axum::serve(listener, router)
        .await
        .map_err(|e| miette::miette!("{}", e))?;

    Ok(())
}
