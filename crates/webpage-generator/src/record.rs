//! The page record schema and its column layout.
//!
//! A record is stored as one row. Everything except the row key lives in one
//! of four column families:
//!
//! | family     | qualifiers                          |
//! |------------|-------------------------------------|
//! | `content`  | `html`                              |
//! | `metadata` | `title`, `created`, `status`, `size`|
//! | `outlinks` | `urls`                              |
//! | `inlinks`  | `urls`                              |
//!
//! All values are rendered as text: numbers in decimal, timestamps in
//! RFC 3339, link lists joined with [`LINK_DELIMITER`].

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator used when a link list is flattened into one cell.
pub const LINK_DELIMITER: &str = ",";

/// HTTP status observed for a synthetic page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum StatusCode {
    Ok,
    NotFound,
    InternalServerError,
}

impl StatusCode {
    /// Every status a page can be generated with.
    pub const ALL: [StatusCode; 3] = [
        StatusCode::Ok,
        StatusCode::NotFound,
        StatusCode::InternalServerError,
    ];

    /// Numeric HTTP code.
    pub fn as_u16(self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
        }
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = String;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            200 => Ok(StatusCode::Ok),
            404 => Ok(StatusCode::NotFound),
            500 => Ok(StatusCode::InternalServerError),
            other => Err(format!("unsupported status code {other} (expected 200, 404 or 500)")),
        }
    }
}

impl From<StatusCode> for u16 {
    fn from(status: StatusCode) -> Self {
        status.as_u16()
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

/// Column families a page record is split across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnFamily {
    Content,
    Metadata,
    Outlinks,
    Inlinks,
}

impl ColumnFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnFamily::Content => "content",
            ColumnFamily::Metadata => "metadata",
            ColumnFamily::Outlinks => "outlinks",
            ColumnFamily::Inlinks => "inlinks",
        }
    }
}

/// A family-qualified column name, rendered as `family:qualifier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Column {
    pub family: ColumnFamily,
    pub qualifier: &'static str,
}

impl Column {
    pub const HTML: Column = Column::new(ColumnFamily::Content, "html");
    pub const TITLE: Column = Column::new(ColumnFamily::Metadata, "title");
    pub const CREATED: Column = Column::new(ColumnFamily::Metadata, "created");
    pub const STATUS: Column = Column::new(ColumnFamily::Metadata, "status");
    pub const SIZE: Column = Column::new(ColumnFamily::Metadata, "size");
    pub const OUTLINKS: Column = Column::new(ColumnFamily::Outlinks, "urls");
    pub const INLINKS: Column = Column::new(ColumnFamily::Inlinks, "urls");

    pub const fn new(family: ColumnFamily, qualifier: &'static str) -> Self {
        Self { family, qualifier }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.family.as_str(), self.qualifier)
    }
}

/// One synthetic web page observation.
///
/// Records are immutable once built. `size_bytes` is always the byte length
/// of `html`, computed by [`PageRecord::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct PageRecord {
    row_key: String,
    html: String,
    title: String,
    created_at: DateTime<Utc>,
    status_code: StatusCode,
    size_bytes: usize,
    outlinks: Vec<String>,
    inlinks: Vec<String>,
}

impl PageRecord {
    pub fn new(
        row_key: String,
        html: String,
        title: String,
        created_at: DateTime<Utc>,
        status_code: StatusCode,
        outlinks: Vec<String>,
        inlinks: Vec<String>,
    ) -> Self {
        let size_bytes = html.len();
        Self {
            row_key,
            html,
            title,
            created_at,
            status_code,
            size_bytes,
            outlinks,
            inlinks,
        }
    }

    pub fn row_key(&self) -> &str {
        &self.row_key
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    pub fn size_bytes(&self) -> usize {
        self.size_bytes
    }

    pub fn outlinks(&self) -> &[String] {
        &self.outlinks
    }

    pub fn inlinks(&self) -> &[String] {
        &self.inlinks
    }

    /// Every stored field except the row key, as `(column, text value)` pairs.
    pub fn columns(&self) -> Vec<(Column, String)> {
        vec![
            (Column::HTML, self.html.clone()),
            (Column::TITLE, self.title.clone()),
            (
                Column::CREATED,
                self.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            ),
            (Column::STATUS, self.status_code.to_string()),
            (Column::SIZE, self.size_bytes.to_string()),
            (Column::OUTLINKS, self.outlinks.join(LINK_DELIMITER)),
            (Column::INLINKS, self.inlinks.join(LINK_DELIMITER)),
        ]
    }
}
