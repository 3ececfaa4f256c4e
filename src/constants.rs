//! Default values for the service configuration.

/// Default simulated processing time for a submitted task, in milliseconds.
///
/// Each task is completed by its background future this long after
/// creation. Override with `--processing-delay-ms` or
/// `TASKD_PROCESSING_DELAY_MS`.
pub const DEFAULT_PROCESSING_DELAY_MS: u64 = 60_000;

/// Default address the HTTP server binds to.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
