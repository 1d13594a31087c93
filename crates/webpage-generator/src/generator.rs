//! Main page generator for producing page records.

use crate::content::ContentGenerator;
use crate::error::GeneratorError;
use crate::generators::html::render_page;
use crate::generators::links::generate_links;
use crate::generators::path::generate_path;
use crate::generators::pick;
use crate::record::PageRecord;
use crate::row_key;
use crate::vocabulary::Vocabulary;
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Page generator that assembles [`PageRecord`]s.
///
/// Structural choices (domain, subdomain, path strategy, status, link
/// counts) come from a seeded RNG; text comes from the content collaborator.
/// A failure in the collaborator aborts the record being built.
pub struct PageGenerator<C> {
    /// Candidate lists to draw from
    vocabulary: Vocabulary,
    /// Supplier of titles, bodies, paths and timestamps
    content: C,
    /// Seeded random number generator for reproducibility
    rng: StdRng,
    /// End of the creation-time window; `None` means "now" at each record
    reference_time: Option<DateTime<Utc>>,
    /// Number of records produced so far
    index: u64,
}

impl<C: ContentGenerator> PageGenerator<C> {
    /// Create a generator over a validated vocabulary.
    pub fn new(vocabulary: Vocabulary, content: C, seed: u64) -> Result<Self, GeneratorError> {
        vocabulary.validate()?;
        Ok(Self {
            vocabulary,
            content,
            rng: StdRng::seed_from_u64(seed),
            reference_time: None,
            index: 0,
        })
    }

    /// Pin the end of the creation-time window.
    pub fn with_reference_time(mut self, reference_time: DateTime<Utc>) -> Self {
        self.reference_time = Some(reference_time);
        self
    }

    /// Number of records generated so far.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Generate a record for a randomly chosen domain.
    pub fn next_record(&mut self) -> Result<PageRecord, GeneratorError> {
        let domain = pick(&mut self.rng, &self.vocabulary.domains).clone();
        self.page_for_domain(&domain)
    }

    /// Generate a record for a page under `domain`.
    ///
    /// A subdomain is prefixed to `domain` to form the page's host; host and
    /// path exist only inside the row key.
    pub fn page_for_domain(&mut self, domain: &str) -> Result<PageRecord, GeneratorError> {
        let subdomain = pick(&mut self.rng, &self.vocabulary.subdomains);
        let full_domain = format!("{subdomain}.{domain}");
        let path = generate_path(
            &mut self.rng,
            &mut self.content,
            &self.vocabulary.path_bases,
        )?;

        let title = self.content.sentence()?;
        let html = render_page(
            &mut self.rng,
            &mut self.content,
            &title,
            &self.vocabulary.html_tags,
        )?;

        let window_end = self.reference_time.unwrap_or_else(Utc::now);
        let window_start = window_end - Duration::days(self.vocabulary.history_days);
        let created_at = self.content.date_time_between(window_start, window_end)?;

        let status_code = *pick(&mut self.rng, &self.vocabulary.status_codes);
        let outlinks = generate_links(&mut self.rng, &mut self.content, &self.vocabulary.domains)?;
        let inlinks = generate_links(&mut self.rng, &mut self.content, &self.vocabulary.domains)?;

        let record = PageRecord::new(
            row_key::encode(&full_domain, &path),
            html,
            title,
            created_at,
            status_code,
            outlinks,
            inlinks,
        );

        debug!(
            "Generated record {}: {} ({} bytes, status {})",
            self.index,
            record.row_key(),
            record.size_bytes(),
            record.status_code()
        );
        self.index += 1;

        Ok(record)
    }

    /// Generate `count` records.
    pub fn records(&mut self, count: u64) -> Result<Vec<PageRecord>, GeneratorError> {
        (0..count).map(|_| self.next_record()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FakerContent;
    use crate::error::ContentError;
    use chrono::TimeZone;

    fn reference_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    fn faker_generator(seed: u64) -> PageGenerator<FakerContent> {
        PageGenerator::new(Vocabulary::default(), FakerContent::new(seed), seed)
            .unwrap()
            .with_reference_time(reference_time())
    }

    #[test]
    fn test_deterministic_generation() {
        let mut gen1 = faker_generator(42);
        let mut gen2 = faker_generator(42);

        let rows1 = gen1.records(5).unwrap();
        let rows2 = gen2.records(5).unwrap();
        assert_eq!(rows1, rows2);
    }

    #[test]
    fn test_current_index() {
        let mut generator = faker_generator(1);
        assert_eq!(generator.current_index(), 0);
        generator.next_record().unwrap();
        generator.next_record().unwrap();
        assert_eq!(generator.current_index(), 2);
    }

    #[test]
    fn test_page_for_domain_uses_given_domain() {
        let mut generator = faker_generator(5);
        let record = generator.page_for_domain("test.org").unwrap();

        let (host, _path) = row_key::decode(record.row_key()).unwrap();
        let (subdomain, domain) = host.split_once('.').unwrap();
        assert_eq!(domain, "test.org");
        assert!(Vocabulary::default().subdomains.iter().any(|s| s == subdomain));
    }

    #[test]
    fn test_created_at_within_window() {
        let mut generator = faker_generator(11);
        let start = reference_time() - Duration::days(100);
        for record in generator.records(50).unwrap() {
            assert!(record.created_at() >= start);
            assert!(record.created_at() <= reference_time());
        }
    }

    #[test]
    fn test_invalid_vocabulary_rejected() {
        let vocabulary = Vocabulary {
            domains: vec![],
            ..Vocabulary::default()
        };
        let result = PageGenerator::new(vocabulary, FakerContent::new(0), 0);
        assert!(matches!(result, Err(GeneratorError::Vocabulary(_))));
    }

    #[test]
    fn test_collaborator_failure_is_fatal() {
        struct NoTitles;
        impl ContentGenerator for NoTitles {
            fn sentence(&mut self) -> Result<String, ContentError> {
                Err(ContentError("sentence source offline".to_string()))
            }
            fn paragraph(&mut self) -> Result<String, ContentError> {
                Ok(String::new())
            }
            fn word(&mut self) -> Result<String, ContentError> {
                Ok(String::new())
            }
            fn uri_path(&mut self) -> Result<String, ContentError> {
                Ok("app".to_string())
            }
            fn date_time_between(
                &mut self,
                start: DateTime<Utc>,
                _end: DateTime<Utc>,
            ) -> Result<DateTime<Utc>, ContentError> {
                Ok(start)
            }
        }

        let mut generator = PageGenerator::new(Vocabulary::default(), NoTitles, 0).unwrap();
        let err = generator.records(3).unwrap_err();
        assert!(matches!(err, GeneratorError::Content(_)));
        assert_eq!(generator.current_index(), 0);
    }
}
