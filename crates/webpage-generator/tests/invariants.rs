//! Record invariants checked across many seeds.

use chrono::{DateTime, TimeZone, Utc};
use webpage_generator::generators::links::MAX_LINKS;
use webpage_generator::row_key::{self, ROW_KEY_SEPARATOR};
use webpage_generator::{ContentError, ContentGenerator, FakerContent, PageGenerator, Vocabulary};

fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 8, 0, 0).unwrap()
}

/// Stub whose paths always end in a bare number, to exercise tail padding.
struct NumericTailContent {
    next: u32,
}

impl ContentGenerator for NumericTailContent {
    fn sentence(&mut self) -> Result<String, ContentError> {
        Ok("Ünïcode títle.".to_string())
    }

    fn paragraph(&mut self) -> Result<String, ContentError> {
        Ok("Paragraph with multi-byte text: 日本語.".to_string())
    }

    fn word(&mut self) -> Result<String, ContentError> {
        Ok("word".to_string())
    }

    fn uri_path(&mut self) -> Result<String, ContentError> {
        self.next += 1;
        Ok(format!("explore/list/{}", self.next))
    }

    fn date_time_between(
        &mut self,
        _start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, ContentError> {
        Ok(end)
    }
}

#[test]
fn size_matches_html_and_link_counts_are_bounded() {
    for seed in 0..20 {
        let mut generator = PageGenerator::new(Vocabulary::default(), FakerContent::new(seed), seed)
            .unwrap()
            .with_reference_time(reference_time());

        for record in generator.records(25).unwrap() {
            assert_eq!(record.size_bytes(), record.html().len());
            assert!(record.outlinks().len() <= MAX_LINKS);
            assert!(record.inlinks().len() <= MAX_LINKS);
            assert!(!record.row_key().is_empty());
            assert_eq!(record.row_key().matches(ROW_KEY_SEPARATOR).count(), 1);
        }
    }
}

#[test]
fn multi_byte_content_counts_bytes() {
    let mut generator =
        PageGenerator::new(Vocabulary::default(), NumericTailContent { next: 0 }, 3).unwrap();

    let record = generator.next_record().unwrap();
    assert_eq!(record.size_bytes(), record.html().len());
    assert!(record.size_bytes() > record.html().chars().count());
    assert!(record.created_at() <= Utc::now());
}

#[test]
fn every_path_has_a_padded_numeric_tail() {
    let mut generator =
        PageGenerator::new(Vocabulary::default(), NumericTailContent { next: 0 }, 8)
            .unwrap()
            .with_reference_time(reference_time());

    for record in generator.records(100).unwrap() {
        let (host, path) = row_key::decode(record.row_key()).unwrap();
        assert_eq!(host.split('.').count(), 3, "unexpected host {host}");

        let tail = path.rsplit('/').next().unwrap();
        assert!(tail.len() >= 3, "tail not padded in {path}");
        assert!(tail.bytes().all(|b| b.is_ascii_digit()));
    }
}

#[test]
fn row_keys_cluster_by_domain() {
    let mut generator = PageGenerator::new(Vocabulary::default(), FakerContent::new(4), 4)
        .unwrap()
        .with_reference_time(reference_time());

    let mut keys: Vec<String> = generator
        .records(200)
        .unwrap()
        .iter()
        .map(|record| record.row_key().to_string())
        .collect();
    keys.sort();

    // Once a reversed registered domain is left behind it never reappears.
    let mut finished: Vec<String> = Vec::new();
    let mut current: Option<String> = None;
    for key in &keys {
        let (host, _) = row_key::decode(key).unwrap();
        let domain = host.split_once('.').unwrap().1.to_string();
        if current.as_deref() != Some(domain.as_str()) {
            assert!(!finished.contains(&domain), "{domain} is split in {keys:?}");
            if let Some(previous) = current.replace(domain) {
                finished.push(previous);
            }
        }
    }
}
