//! Error types for the HBase populator.

use thiserror::Error;
use webpage_generator::GeneratorError;

/// Errors raised by a store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway answered with a non-success status.
    #[error("HBase REST gateway returned {status} for {url}: {body}")]
    Status {
        status: u16,
        url: String,
        body: String,
    },

    /// The target table does not exist.
    #[error("Table '{0}' does not exist")]
    TableNotFound(String),

    /// A row was rejected before it was sent.
    #[error("Invalid mutation: {0}")]
    InvalidMutation(String),
}

/// A single record could not be written.
///
/// These are reported and counted, never propagated out of a population.
#[derive(Error, Debug)]
#[error("Failed to insert record {row_key}: {source}")]
pub struct RecordWriteError {
    pub row_key: String,
    #[source]
    pub source: StoreError,
}

/// Errors that abort a population run.
#[derive(Error, Debug)]
pub enum PopulatorError {
    /// Every connection attempt failed.
    #[error("Failed to connect to HBase at '{host}' (table '{table}') after {attempts} attempts: {source}")]
    Connection {
        host: String,
        table: String,
        attempts: u32,
        #[source]
        source: StoreError,
    },

    /// Record generation failed.
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),
}
