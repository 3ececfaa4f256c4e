//! CLI and environment configuration.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;

use crate::constants::{DEFAULT_BIND_ADDR, DEFAULT_PROCESSING_DELAY_MS};
use crate::store::StoreConfig;

/// Runtime configuration for the service.
#[derive(Debug, Parser)]
#[command(name = "taskd", version, about = "Asynchronous task-submission service")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "TASKD_BIND", default_value = DEFAULT_BIND_ADDR)]
    pub bind: SocketAddr,

    /// Simulated processing time for each submitted task, in milliseconds.
    #[arg(
        long,
        env = "TASKD_PROCESSING_DELAY_MS",
        default_value_t = DEFAULT_PROCESSING_DELAY_MS
    )]
    pub processing_delay_ms: u64,
}

impl Config {
    /// The store configuration derived from the CLI/environment values.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            processing_delay: Duration::from_millis(self.processing_delay_ms),
        }
    }
}
