//! Command-line interface for webpage-loader
//!
//! # Usage Examples
//!
//! ```bash
//! # Generate 20 pages and write them to the `web_pages` table
//! webpage-loader --hbase-host hmaster:8080 --table web_pages
//!
//! # Reproducible run with a custom vocabulary and larger batches
//! webpage-loader --record-count 5000 --batch-size 500 --seed 42 \
//!   --vocabulary vocabulary.yaml
//!
//! # Only generate and log the records
//! RUST_LOG=debug webpage-loader --record-count 5 --dry-run
//! ```
//!
//! The table must exist beforehand, e.g. from the HBase shell:
//! `create 'web_pages', 'content', 'metadata', 'outlinks', 'inlinks'`.

use anyhow::Context;
use clap::Parser;
use hbase_populate::{connect, HBasePopulateArgs, HBasePopulator, RestConnector};
use webpage_generator::{FakerContent, PageGenerator, Vocabulary};

/// Offset between the structural seed and the text seed, so the two RNG
/// streams differ for the same `--seed`.
const CONTENT_SEED_OFFSET: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Parser)]
#[command(name = "webpage-loader")]
#[command(about = "Generate synthetic web page records and load them into HBase")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    args: HBasePopulateArgs,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let Cli { args } = Cli::parse();
    let generate = &args.generate;

    let vocabulary = match &generate.vocabulary {
        Some(path) => Vocabulary::from_file(path)
            .with_context(|| format!("Failed to load vocabulary from {}", path.display()))?,
        None => Vocabulary::default(),
    };

    let seed = generate.seed.unwrap_or_else(rand::random);
    tracing::info!("Using seed {seed}");

    let content = FakerContent::new(seed.wrapping_add(CONTENT_SEED_OFFSET));
    let generator = PageGenerator::new(vocabulary, content, seed)?;
    let mut populator = HBasePopulator::new(generator).with_batch_size(generate.batch_size);

    let records = populator
        .generate(generate.record_count)
        .context("Failed to generate page records")?;

    if generate.dry_run {
        for (i, record) in records.iter().enumerate() {
            tracing::info!(
                "[DRY-RUN] Record {}: {} | {} | status {} | {} bytes",
                i + 1,
                record.row_key(),
                record.title(),
                record.status_code(),
                record.size_bytes()
            );
        }
        tracing::info!(
            "[DRY-RUN] Would insert {} records into '{}'",
            records.len(),
            args.connection.table
        );
        return Ok(());
    }

    let connector = RestConnector::new(args.connection.request_timeout())
        .context("Failed to build HTTP client")?;
    let mut table = connect(&connector, &args.connection.connect_opts())?;

    let metrics = populator.insert(&mut table, &records);
    if metrics.rows_failed() > 0 {
        tracing::warn!(
            "{} of {} records could not be written",
            metrics.rows_failed(),
            metrics.records_attempted
        );
    }

    Ok(())
}
