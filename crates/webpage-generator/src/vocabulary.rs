//! Candidate lists the generator draws from.
//!
//! The vocabulary is plain data handed to [`PageGenerator`](crate::PageGenerator)
//! at construction. It can be loaded from YAML; omitted keys keep their
//! built-in defaults:
//!
//! ```yaml
//! domains: [example.com, test.org]
//! subdomains: [www, blog]
//! path_bases: [posts, articles]
//! status_codes: [200, 404]
//! html_tags: [p, div, h2]
//! history_days: 30
//! ```

use crate::error::GeneratorError;
use crate::record::StatusCode;
use crate::row_key::ROW_KEY_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Upper bound on the age of a generated page, in days, by default.
pub const DEFAULT_HISTORY_DAYS: i64 = 100;

const MAX_HISTORY_DAYS: i64 = 36_500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// Registered domains pages and links are drawn from
    pub domains: Vec<String>,
    /// Host labels prefixed to a domain
    pub subdomains: Vec<String>,
    /// First segment of numbered paths (`posts/007`)
    pub path_bases: Vec<String>,
    /// Statuses a page may report
    pub status_codes: Vec<StatusCode>,
    /// Tags used for the trailing elements of a page body
    pub html_tags: Vec<String>,
    /// Width of the creation-time window, ending at the reference time
    pub history_days: i64,
}

impl Default for Vocabulary {
    fn default() -> Self {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        Self {
            domains: owned(&["example.com", "test.org", "demo.net", "mysite.io", "sample.co"]),
            subdomains: owned(&["www", "blog", "news", "shop", "api"]),
            path_bases: owned(&["posts", "articles", "page", "entry"]),
            status_codes: StatusCode::ALL.to_vec(),
            html_tags: owned(&["p", "div", "span", "h2", "h3"]),
            history_days: DEFAULT_HISTORY_DAYS,
        }
    }
}

impl Vocabulary {
    /// Parse a vocabulary from YAML and validate it.
    pub fn from_yaml(yaml: &str) -> Result<Self, GeneratorError> {
        let vocabulary: Vocabulary = serde_yaml::from_str(yaml)?;
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    /// Load a vocabulary from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GeneratorError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Reject vocabularies the generator cannot draw from.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        let lists = [
            ("domains", self.domains.is_empty()),
            ("subdomains", self.subdomains.is_empty()),
            ("path_bases", self.path_bases.is_empty()),
            ("status_codes", self.status_codes.is_empty()),
            ("html_tags", self.html_tags.is_empty()),
        ];
        if let Some((name, _)) = lists.iter().find(|(_, empty)| *empty) {
            return Err(GeneratorError::Vocabulary(format!("'{name}' must not be empty")));
        }

        if let Some(bad) = self
            .domains
            .iter()
            .chain(&self.subdomains)
            .find(|label| label.is_empty() || label.contains(['/', ROW_KEY_SEPARATOR]))
        {
            return Err(GeneratorError::Vocabulary(format!(
                "invalid host label '{bad}'"
            )));
        }

        if let Some(bad) = self
            .path_bases
            .iter()
            .find(|base| base.is_empty() || base.contains(['/', ROW_KEY_SEPARATOR]))
        {
            return Err(GeneratorError::Vocabulary(format!(
                "invalid path base '{bad}'"
            )));
        }

        if !(1..=MAX_HISTORY_DAYS).contains(&self.history_days) {
            return Err(GeneratorError::Vocabulary(format!(
                "history_days must be between 1 and {MAX_HISTORY_DAYS}, got {}",
                self.history_days
            )));
        }

        Ok(())
    }
}
