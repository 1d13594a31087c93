//! Error types for page generation.

use thiserror::Error;

/// Failure reported by a [`ContentGenerator`](crate::ContentGenerator).
///
/// Page content is a required input, so this error is never recovered
/// inside the crate; it aborts the generation run.
#[derive(Error, Debug)]
#[error("Content generator failed: {0}")]
pub struct ContentError(pub String);

/// Error type for generator operations.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The content collaborator failed while assembling a record
    #[error(transparent)]
    Content(#[from] ContentError),

    /// Vocabulary is unusable (empty candidate list, bad window, ...)
    #[error("Invalid vocabulary: {0}")]
    Vocabulary(String),

    /// Error reading vocabulary file
    #[error("Failed to read vocabulary file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
