//! HBase populator for synthetic web pages.

use crate::batch::{Batch, DEFAULT_BATCH_SIZE};
use crate::error::{PopulatorError, RecordWriteError};
use crate::store::{RowMutation, Table};
use std::time::{Duration, Instant};
use tracing::{info, warn};
use webpage_generator::{ContentGenerator, PageGenerator, PageRecord};

/// Metrics from an ingestion run.
#[derive(Debug, Clone, Default)]
pub struct IngestMetrics {
    /// Records handed to the batch writer.
    pub records_attempted: u64,
    /// Rows the store accepted.
    pub rows_written: u64,
    /// Row keys that could not be written.
    pub failed_row_keys: Vec<String>,
    /// Number of multi-row flushes sent.
    pub batch_count: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl IngestMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    pub fn rows_failed(&self) -> usize {
        self.failed_row_keys.len()
    }
}

/// Write `records` to `table` in batches of `batch_size`.
///
/// Every record is attempted. A record that cannot be written is logged
/// with its row key and listed in the returned metrics; it never stops the
/// records after it.
pub fn insert_records<T: Table>(
    table: &mut T,
    records: &[PageRecord],
    batch_size: usize,
) -> IngestMetrics {
    let start_time = Instant::now();
    let mut metrics = IngestMetrics::default();
    let mut rejected = Vec::new();

    info!(
        "Inserting {} records into '{}' (batch size: {})",
        records.len(),
        table.name(),
        batch_size
    );

    let mut batch = Batch::new(table, batch_size);
    for record in records {
        metrics.records_attempted += 1;
        if let Err(e) = batch.put_mutation(RowMutation::from_record(record)) {
            warn!("{}", e);
            let RecordWriteError { row_key, .. } = e;
            rejected.push(row_key);
        }
    }
    let stats = batch.finish();

    metrics.rows_written = stats.rows_written;
    metrics.batch_count = stats.batches_flushed;
    metrics.failed_row_keys = rejected;
    metrics.failed_row_keys.extend(stats.failed_row_keys);
    metrics.total_duration = start_time.elapsed();

    info!(
        "Insertion complete: {} of {} records written, {} failed in {:?} ({:.2} rows/sec)",
        metrics.rows_written,
        metrics.records_attempted,
        metrics.rows_failed(),
        metrics.total_duration,
        metrics.rows_per_second()
    );

    metrics
}

/// Generates page records and writes them to HBase.
pub struct HBasePopulator<C> {
    generator: PageGenerator<C>,
    batch_size: usize,
}

impl<C: ContentGenerator> HBasePopulator<C> {
    pub fn new(generator: PageGenerator<C>) -> Self {
        Self {
            generator,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Set the number of rows per flush.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Get the current generation index.
    pub fn current_index(&self) -> u64 {
        self.generator.current_index()
    }

    /// Generate `count` records without writing them.
    ///
    /// A content failure aborts the whole run before anything is written.
    pub fn generate(&mut self, count: u64) -> Result<Vec<PageRecord>, PopulatorError> {
        let start_time = Instant::now();
        let records = self.generator.records(count)?;
        info!(
            "Generated {} records in {:?}",
            records.len(),
            start_time.elapsed()
        );
        Ok(records)
    }

    /// Write already generated records.
    pub fn insert<T: Table>(&self, table: &mut T, records: &[PageRecord]) -> IngestMetrics {
        insert_records(table, records, self.batch_size)
    }

    /// Generate `count` records and write them to `table`.
    pub fn populate<T: Table>(
        &mut self,
        table: &mut T,
        count: u64,
    ) -> Result<IngestMetrics, PopulatorError> {
        let records = self.generate(count)?;
        Ok(self.insert(table, &records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics() {
        let metrics = IngestMetrics {
            records_attempted: 1000,
            rows_written: 990,
            failed_row_keys: vec!["a".to_string(); 10],
            batch_count: 10,
            total_duration: Duration::from_secs(10),
        };

        assert_eq!(metrics.rows_per_second(), 99.0);
        assert_eq!(metrics.rows_failed(), 10);
        assert_eq!(IngestMetrics::default().rows_per_second(), 0.0);
    }
}
