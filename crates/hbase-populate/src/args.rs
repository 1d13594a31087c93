//! CLI argument definitions for the HBase populator.

use crate::batch::DEFAULT_BATCH_SIZE;
use crate::connect::{ConnectOpts, DEFAULT_CONNECT_RETRIES};
use clap::Args;
use std::path::PathBuf;
use std::time::Duration;

/// HBase REST gateway connection arguments.
#[derive(Args, Clone, Debug)]
pub struct HBaseConnectionArgs {
    /// HBase REST gateway address (host:port or URL)
    #[arg(long, env = "HBASE_HOST", default_value = "hmaster:8080")]
    pub hbase_host: String,

    /// Target table; must already exist with families content, metadata, outlinks, inlinks
    #[arg(long, env = "HBASE_TABLE", default_value = "web_pages")]
    pub table: String,

    /// Total connection attempts before giving up
    #[arg(long, default_value_t = DEFAULT_CONNECT_RETRIES)]
    pub connect_retries: u32,

    /// Delay between connection attempts in milliseconds
    #[arg(long, default_value = "0")]
    pub retry_delay_ms: u64,

    /// HTTP request timeout in seconds
    #[arg(long, default_value = "30")]
    pub request_timeout_secs: u64,
}

impl HBaseConnectionArgs {
    pub fn connect_opts(&self) -> ConnectOpts {
        ConnectOpts {
            host: self.hbase_host.clone(),
            table: self.table.clone(),
            max_attempts: self.connect_retries,
            retry_delay: Duration::from_millis(self.retry_delay_ms),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Record generation arguments.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Number of page records to generate
    #[arg(long, default_value = "20")]
    pub record_count: u64,

    /// Rows per HBase write request
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Random seed for deterministic generation (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// YAML file overriding the domain, subdomain, path and tag vocabularies
    #[arg(long)]
    pub vocabulary: Option<PathBuf>,

    /// Generate and log records without connecting to HBase
    #[arg(long)]
    pub dry_run: bool,
}

/// All HBase populate arguments.
#[derive(Args, Clone, Debug)]
pub struct HBasePopulateArgs {
    #[command(flatten)]
    pub connection: HBaseConnectionArgs,

    #[command(flatten)]
    pub generate: GenerateArgs,
}
