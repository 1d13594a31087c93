//! Connecting to the store with a bounded number of attempts.

use crate::error::PopulatorError;
use crate::store::Connector;
use std::time::Duration;

/// Default number of connection attempts
pub const DEFAULT_CONNECT_RETRIES: u32 = 3;

/// Where to connect and how hard to try.
#[derive(Clone, Debug)]
pub struct ConnectOpts {
    pub host: String,
    pub table: String,
    /// Total attempts, including the first one
    pub max_attempts: u32,
    /// Pause between attempts; zero retries immediately
    pub retry_delay: Duration,
}

impl Default for ConnectOpts {
    fn default() -> Self {
        Self {
            host: "hmaster:8080".to_string(),
            table: "web_pages".to_string(),
            max_attempts: DEFAULT_CONNECT_RETRIES,
            retry_delay: Duration::ZERO,
        }
    }
}

/// Connect and bind to the configured table, retrying failed attempts.
///
/// After `max_attempts` failures the last error is returned as
/// [`PopulatorError::Connection`]; nothing should be written in that case.
pub fn connect<C: Connector>(connector: &C, opts: &ConnectOpts) -> Result<C::Table, PopulatorError> {
    let max_attempts = opts.max_attempts.max(1);

    tracing::debug!(
        "Connecting to HBase at {} (table: {})",
        opts.host,
        opts.table
    );

    let mut attempt = 1;
    loop {
        match connector.open(&opts.host, &opts.table) {
            Ok(table) => {
                if attempt > 1 {
                    tracing::info!("Successfully connected to HBase after {} attempts", attempt);
                }
                return Ok(table);
            }
            Err(source) if attempt >= max_attempts => {
                return Err(PopulatorError::Connection {
                    host: opts.host.clone(),
                    table: opts.table.clone(),
                    attempts: attempt,
                    source,
                });
            }
            Err(e) => {
                tracing::warn!(
                    "Connection attempt {}/{} to '{}' failed: {}",
                    attempt,
                    max_attempts,
                    opts.host,
                    e
                );
                if !opts.retry_delay.is_zero() {
                    std::thread::sleep(opts.retry_delay);
                }
                attempt += 1;
            }
        }
    }
}
