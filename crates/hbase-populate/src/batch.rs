//! Buffered multi-row writes with per-row failure isolation.
//!
//! A [`Batch`] collects validated rows and sends them to its table in groups
//! of at most `batch_size`. Pending rows are flushed when the group is full,
//! on [`Batch::finish`], and when the batch is dropped.
//!
//! If a group is rejected, every row in it is re-sent on its own. Rows that
//! still fail are logged with their row key and recorded in [`BatchStats`];
//! the rest of the group, and every later group, is still written.

use crate::error::RecordWriteError;
use crate::store::{Cell, RowMutation, Table};
use std::mem;
use tracing::{debug, warn};

/// Default number of rows per flush.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Outcome of the flushes performed by a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Rows the store accepted.
    pub rows_written: u64,
    /// Row keys the store rejected, in the order they were attempted.
    pub failed_row_keys: Vec<String>,
    /// Number of multi-row flushes sent.
    pub batches_flushed: u64,
}

/// Write scope over a table.
pub struct Batch<'a, T: Table> {
    table: &'a mut T,
    batch_size: usize,
    pending: Vec<RowMutation>,
    stats: BatchStats,
    finished: bool,
}

impl<'a, T: Table> Batch<'a, T> {
    /// Open a batch; a `batch_size` of zero is treated as one.
    pub fn new(table: &'a mut T, batch_size: usize) -> Self {
        let batch_size = batch_size.max(1);
        Self {
            table,
            batch_size,
            pending: Vec::with_capacity(batch_size),
            stats: BatchStats::default(),
            finished: false,
        }
    }

    /// Queue a row, flushing if the batch is full.
    ///
    /// Rows that fail validation are rejected immediately and never queued.
    pub fn put(&mut self, row_key: &str, cells: Vec<Cell>) -> Result<(), RecordWriteError> {
        self.put_mutation(RowMutation::new(row_key, cells))
    }

    /// Queue an already-built mutation, flushing if the batch is full.
    pub fn put_mutation(&mut self, mutation: RowMutation) -> Result<(), RecordWriteError> {
        if let Err(source) = mutation.validate() {
            return Err(RecordWriteError {
                row_key: mutation.row_key,
                source,
            });
        }

        self.pending.push(mutation);
        if self.pending.len() >= self.batch_size {
            self.flush();
        }
        Ok(())
    }

    /// Number of rows waiting to be flushed.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Send all pending rows.
    pub fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let rows = mem::take(&mut self.pending);
        self.stats.batches_flushed += 1;

        match self.table.put_rows(&rows) {
            Ok(()) => {
                self.stats.rows_written += rows.len() as u64;
                debug!(
                    "Flushed {} rows to '{}' (batch {})",
                    rows.len(),
                    self.table.name(),
                    self.stats.batches_flushed
                );
            }
            Err(e) => {
                warn!(
                    "Batch of {} rows to '{}' failed ({}); retrying rows individually",
                    rows.len(),
                    self.table.name(),
                    e
                );
                for row in rows {
                    self.put_single(row);
                }
            }
        }
    }

    fn put_single(&mut self, row: RowMutation) {
        match self.table.put_rows(std::slice::from_ref(&row)) {
            Ok(()) => self.stats.rows_written += 1,
            Err(source) => {
                let err = RecordWriteError {
                    row_key: row.row_key,
                    source,
                };
                warn!("{}", err);
                self.stats.failed_row_keys.push(err.row_key);
            }
        }
    }

    /// Flush what is left and close the batch.
    pub fn finish(mut self) -> BatchStats {
        self.flush();
        self.finished = true;
        mem::take(&mut self.stats)
    }
}

impl<T: Table> Drop for Batch<'_, T> {
    fn drop(&mut self) {
        if !self.finished {
            self.flush();
        }
    }
}
