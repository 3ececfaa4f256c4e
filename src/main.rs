//! Service entrypoint: logging, configuration, store, serve.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use taskd::config::Config;
use taskd::server;
use taskd::store::TaskStore;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();
    info!(
        delay_ms = config.processing_delay_ms,
        "starting task-submission service"
    );

    let store = TaskStore::new().with_config(config.store_config());
    server::serve(config.bind, store).await
}
