//! Text and timestamp producers the record model consumes.
//!
//! The generator treats page text as opaque. Anything implementing
//! [`ContentGenerator`] can be plugged in; tests use fixed stubs, the binary
//! uses [`FakerContent`].

use crate::error::ContentError;
use chrono::{DateTime, Utc};
use fake::faker::lorem::en::{Paragraph, Sentence, Word};
use fake::Fake;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of page text, URI paths and timestamps.
pub trait ContentGenerator {
    /// A short sentence, used for titles and headings.
    fn sentence(&mut self) -> Result<String, ContentError>;

    /// A paragraph of body text.
    fn paragraph(&mut self) -> Result<String, ContentError>;

    /// A single word.
    fn word(&mut self) -> Result<String, ContentError>;

    /// A relative URI path without a leading slash, e.g. `blog/category`.
    fn uri_path(&mut self) -> Result<String, ContentError>;

    /// A timestamp in `[start, end]`.
    fn date_time_between(
        &mut self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, ContentError>;
}

/// Segments joined into URI paths.
const URI_SEGMENTS: &[&str] = &[
    "app",
    "main",
    "wp-content",
    "search",
    "category",
    "tag",
    "categories",
    "tags",
    "blog",
    "posts",
    "list",
    "explore",
];

/// Lorem-ipsum content backed by the `fake` crate and a seeded RNG.
pub struct FakerContent {
    rng: StdRng,
}

impl FakerContent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ContentGenerator for FakerContent {
    fn sentence(&mut self) -> Result<String, ContentError> {
        Ok(Sentence(4..10).fake_with_rng(&mut self.rng))
    }

    fn paragraph(&mut self) -> Result<String, ContentError> {
        Ok(Paragraph(3..7).fake_with_rng(&mut self.rng))
    }

    fn word(&mut self) -> Result<String, ContentError> {
        Ok(Word().fake_with_rng(&mut self.rng))
    }

    fn uri_path(&mut self) -> Result<String, ContentError> {
        let depth = self.rng.gen_range(1..=3);
        let segments: Vec<&str> = (0..depth)
            .map(|_| URI_SEGMENTS[self.rng.gen_range(0..URI_SEGMENTS.len())])
            .collect();
        Ok(segments.join("/"))
    }

    fn date_time_between(
        &mut self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, ContentError> {
        let start_ts = start.timestamp();
        let end_ts = end.timestamp();

        if start_ts >= end_ts {
            return Ok(start);
        }

        let random_ts = self.rng.gen_range(start_ts..=end_ts);
        DateTime::from_timestamp(random_ts, 0)
            .ok_or_else(|| ContentError(format!("timestamp {random_ts} is out of range")))
    }
}
