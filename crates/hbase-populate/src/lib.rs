//! HBase populator for synthetic web page records.
//!
//! This crate takes [`PageRecord`](webpage_generator::PageRecord)s from the
//! webpage-generator crate and writes them to an HBase table:
//!
//! ```text
//!  Connector ──connect() (bounded retry)──► Table
//!                                            │
//!  [PageRecord] ──RowMutation::from_record──► Batch ──put_rows──► HBase
//!                                            │
//!                          per-row fallback on a failed flush
//! ```
//!
//! A failure to write one record is logged with its row key and never stops
//! the rest of the run. Only connection failures (after retries) and
//! generator failures abort a population.
//!
//! # Example
//!
//! ```ignore
//! use hbase_populate::{connect, ConnectOpts, HBasePopulator, RestConnector};
//!
//! let connector = RestConnector::new(std::time::Duration::from_secs(30))?;
//! let mut table = connect(&connector, &ConnectOpts::default())?;
//! let mut populator = HBasePopulator::new(generator).with_batch_size(100);
//! let metrics = populator.populate(&mut table, 1000)?;
//! ```

pub mod args;
mod batch;
mod connect;
mod error;
mod populator;
pub mod rest;
mod store;

pub use args::{GenerateArgs, HBaseConnectionArgs, HBasePopulateArgs};
pub use batch::{Batch, BatchStats, DEFAULT_BATCH_SIZE};
pub use connect::{connect, ConnectOpts, DEFAULT_CONNECT_RETRIES};
pub use error::{PopulatorError, RecordWriteError, StoreError};
pub use populator::{insert_records, HBasePopulator, IngestMetrics};
pub use rest::{RestConnector, RestTable};
pub use store::{Cell, Connector, RowMutation, Table, MAX_ROW_KEY_LENGTH};
