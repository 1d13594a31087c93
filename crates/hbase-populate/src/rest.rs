//! HBase REST gateway backend.
//!
//! Talks to the HBase REST server (`hbase rest start`) with its JSON
//! representation, where row keys, column names and values are base64:
//!
//! ```json
//! {"Row":[{"key":"<b64>","Cell":[{"column":"<b64>","$":"<b64>"}]}]}
//! ```
//!
//! Binding a table checks `GET /<table>/schema`; writes are multi-row
//! `PUT /<table>/<any-row>` requests, where the path row is ignored in
//! favour of the keys in the body.

use crate::error::StoreError;
use crate::store::{Connector, RowMutation, Table};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::blocking::{Client, Response};
use reqwest::header::ACCEPT;
use serde::Serialize;
use std::time::Duration;

/// Placeholder row in the URL of a multi-row put.
const BATCH_ROW_PLACEHOLDER: &str = "batch";

#[derive(Debug, Serialize)]
pub struct CellSet {
    #[serde(rename = "Row")]
    pub rows: Vec<RowBody>,
}

#[derive(Debug, Serialize)]
pub struct RowBody {
    pub key: String,
    #[serde(rename = "Cell")]
    pub cells: Vec<CellBody>,
}

#[derive(Debug, Serialize)]
pub struct CellBody {
    pub column: String,
    #[serde(rename = "$")]
    pub value: String,
}

/// Encode rows into the gateway's JSON cell-set representation.
pub fn encode_cell_set(rows: &[RowMutation]) -> CellSet {
    CellSet {
        rows: rows
            .iter()
            .map(|row| RowBody {
                key: STANDARD.encode(row.row_key.as_bytes()),
                cells: row
                    .cells
                    .iter()
                    .map(|cell| CellBody {
                        column: STANDARD.encode(cell.column.as_bytes()),
                        value: STANDARD.encode(&cell.value),
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// Normalize a `host[:port]` or URL into a base URL without trailing slash.
pub fn base_url(host: &str) -> String {
    let host = host.trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("http://{host}")
    }
}

fn check_status(response: Response, url: &str) -> Result<Response, StoreError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let body = response.text().unwrap_or_default();
    Err(StoreError::Status {
        status,
        url: url.to_string(),
        body,
    })
}

/// Opens tables on an HBase REST gateway.
pub struct RestConnector {
    client: Client,
}

impl RestConnector {
    pub fn new(timeout: Duration) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl Connector for RestConnector {
    type Table = RestTable;

    fn open(&self, host: &str, table: &str) -> Result<RestTable, StoreError> {
        let table_url = format!("{}/{table}", base_url(host));
        let schema_url = format!("{table_url}/schema");

        tracing::debug!("Checking table schema at {schema_url}");

        let response = self
            .client
            .get(&schema_url)
            .header(ACCEPT, "application/json")
            .send()?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::TableNotFound(table.to_string()));
        }
        check_status(response, &schema_url)?;

        Ok(RestTable {
            client: self.client.clone(),
            name: table.to_string(),
            put_url: format!("{table_url}/{BATCH_ROW_PLACEHOLDER}"),
        })
    }
}

/// A table bound on an HBase REST gateway.
pub struct RestTable {
    client: Client,
    name: String,
    put_url: String,
}

impl Table for RestTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn put_rows(&mut self, rows: &[RowMutation]) -> Result<(), StoreError> {
        if rows.is_empty() {
            return Ok(());
        }

        let response = self
            .client
            .put(&self.put_url)
            .header(ACCEPT, "application/json")
            .json(&encode_cell_set(rows))
            .send()?;
        check_status(response, &self.put_url)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Cell;

    #[test]
    fn test_base_url() {
        assert_eq!(base_url("hmaster:8080"), "http://hmaster:8080");
        assert_eq!(base_url("http://hbase:8080/"), "http://hbase:8080");
        assert_eq!(base_url("https://hbase.internal"), "https://hbase.internal");
    }

    #[test]
    fn test_encode_cell_set() {
        let rows = vec![RowMutation::new(
            "com.example.www#page/001",
            vec![
                Cell::new("metadata:status", "200"),
                Cell::new("inlinks:urls", ""),
            ],
        )];

        let json = serde_json::to_value(encode_cell_set(&rows)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Row": [{
                    "key": "Y29tLmV4YW1wbGUud3d3I3BhZ2UvMDAx",
                    "Cell": [
                        {"column": "bWV0YWRhdGE6c3RhdHVz", "$": "MjAw"},
                        {"column": "aW5saW5rczp1cmxz", "$": ""}
                    ]
                }]
            })
        );
    }
}
