//! Synthetic web page generator for the webpage-loader.
//!
//! This crate produces [`PageRecord`]s: fake observations of web pages whose
//! row keys are laid out for locality-aware scans in a wide-column store.
//! Generation is driven by a seeded RNG so the same seed and vocabulary
//! reproduce the same structural choices.
//!
//! # Architecture
//!
//! ```text
//! Vocabulary (YAML or defaults)
//!        │
//!        ▼
//! ┌─────────────────────┐      ┌──────────────────────┐
//! │   PageGenerator     │◄─────│  ContentGenerator    │
//! │                     │      │  (FakerContent, or   │
//! │  - rng (StdRng)     │      │   a stub in tests)   │
//! │  - index            │      └──────────────────────┘
//! └─────────┬───────────┘
//!           │  paths, links, html, row_key::encode
//!           ▼
//!   PageRecord { row_key, html, title, created_at, status_code, ... }
//! ```
//!
//! # Example
//!
//! ```rust
//! use webpage_generator::{FakerContent, PageGenerator, Vocabulary};
//!
//! let mut generator = PageGenerator::new(Vocabulary::default(), FakerContent::new(7), 42).unwrap();
//! let record = generator.next_record().unwrap();
//! assert_eq!(record.size_bytes(), record.html().len());
//! ```

pub mod content;
pub mod error;
pub mod generator;
pub mod generators;
pub mod record;
pub mod row_key;
pub mod vocabulary;

// Re-exports for convenience
pub use content::{ContentGenerator, FakerContent};
pub use error::{ContentError, GeneratorError};
pub use generator::PageGenerator;
pub use record::{Column, ColumnFamily, PageRecord, StatusCode};
pub use vocabulary::Vocabulary;
