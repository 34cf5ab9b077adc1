//! ==============================================================================
//! main.rs - sst pusher entry point
//! ==============================================================================
//!
//! purpose:
//!     simulates a sea-surface temperature sensor at pulau komodo and feeds
//!     its readings to the ingestion backend, the way a field node would.
//!
//! responsibilities:
//!     - load configuration (defaults reproduce the fixed simulator)
//!     - install stderr logging
//!     - run the push loop, printing `<status> <body>` per reading on stdout
//!
//! relationships:
//!     - uses: config.rs (pusher.toml), logging.rs (tracing setup)
//!     - uses: pusher.rs (the loop), transport.rs (reqwest client)
//!
//! flow:
//!
//!     ┌───────────┐   ┌────────────┐   ┌───────────┐   ┌─────────┐
//!     │ draw value│ → │ json body  │ → │ POST      │ → │ stdout  │
//!     │ (rand)    │   │ (serde)    │   │ /ingest   │   │ line    │
//!     └───────────┘   └────────────┘   └───────────┘   └────┬────┘
//!           ▲                                               │
//!           └──────────────── sleep interval ◄──────────────┘
//!
//! a failed request ends the process with an error; non-2xx responses are
//! printed like any other.
//!
//! ==============================================================================

mod config;
mod logging;
mod pusher;
mod reading;
mod transport;

use anyhow::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // step 1: load configuration
    let config = logging::bootstrap(config::PusherConfig::load_or_default);

    // step 2: logging at the configured level
    logging::init(&config.logging.level)?;
    config.log_summary();

    // step 3: push readings
    let transport = transport::HttpTransport::new()?;
    let mut rng = rand::thread_rng();
    let mut stdout = std::io::stdout().lock();
    pusher::run(&config, &transport, &mut rng, &mut stdout).await?;

    Ok(())
}
