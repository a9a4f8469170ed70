//! Pokedex - An interactive PokeAPI explorer
//!
//! Starts the REPL on stdin/stdout with a shared response cache.

use std::sync::Arc;

use tokio::io::BufReader;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{repl, Config, HttpFetcher, PokeApiClient, ResponseCache, Session};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the response cache, which starts its reaper
/// 4. Build the HTTP fetcher and API client
/// 5. Run the prompt loop until `exit`, end of input or Ctrl+C
/// 6. Stop the reaper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs stay out of the way of the prompt,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_interval={}s, api_base_url={}, request_timeout={}s",
        config.cache_interval, config.api_base_url, config.request_timeout
    );

    let cache = Arc::new(ResponseCache::new(config.cache_interval()));
    let fetcher = Arc::new(HttpFetcher::new(config.request_timeout())?);
    let client = PokeApiClient::new(config.api_base_url.clone(), cache.clone(), fetcher);
    let mut session = Session::new(client);

    let mut stdout = std::io::stdout();
    let interrupted = tokio::select! {
        result = repl::run(&mut session, BufReader::new(tokio::io::stdin()), &mut stdout) => {
            result?;
            false
        }
        _ = signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down...");
            true
        }
    };

    cache.stop().await;
    info!("Pokedex shutdown complete");

    if interrupted {
        // A stdin read is still parked on a blocking thread and would hold up
        // runtime shutdown.
        println!();
        std::process::exit(0);
    }

    Ok(())
}
