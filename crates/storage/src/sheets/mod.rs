//! Remote whole-sheet adapter.
//!
//! The destination is a spreadsheet values API addressed as a whole table:
//! one `GET` returns every row (header first) and one `PUT` replaces the
//! entire table contents. There is no row-level append.

use std::env;
use std::sync::Arc;

use async_trait::async_trait;
use coleta_core::model::{ActivityRecord, WIRE_COLUMNS};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::repository::{ActivityLogRepository, PersistenceError, Storage};

#[derive(Clone, Debug)]
pub struct SheetsConfig {
    pub base_url: String,
    pub api_key: String,
    pub spreadsheet_id: String,
    pub range: String,
}

impl SheetsConfig {
    /// Reads the remote-store credentials from the environment.
    ///
    /// Returns `None` when the API key or spreadsheet id is missing, in
    /// which case the app falls back to a local backend.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("COLETA_SHEETS_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let spreadsheet_id = env::var("COLETA_SHEETS_SPREADSHEET_ID").ok()?;
        if spreadsheet_id.trim().is_empty() {
            return None;
        }
        let base_url = env::var("COLETA_SHEETS_BASE_URL")
            .unwrap_or_else(|_| "https://sheets.googleapis.com".into());
        let range = env::var("COLETA_SHEETS_RANGE").unwrap_or_else(|_| "atividades".into());
        Some(Self {
            base_url,
            api_key,
            spreadsheet_id,
            range,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValueRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    major_dimension: Option<String>,
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// `ActivityLogRepository` backed by the remote sheet.
#[derive(Clone)]
pub struct RemoteSheetLog {
    client: Client,
    config: SheetsConfig,
}

impl RemoteSheetLog {
    #[must_use]
    pub fn new(config: SheetsConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn values_url(&self) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.spreadsheet_id,
            self.config.range
        )
    }

    async fn read_table(&self) -> Result<Vec<Vec<String>>, PersistenceError> {
        let response = self
            .client
            .get(self.values_url())
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| PersistenceError::Connection(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PersistenceError::Connection(format!(
                "sheet read failed with status {}",
                response.status()
            )));
        }

        let body: ValueRange = response
            .json()
            .await
            .map_err(|e| PersistenceError::Serialization(e.to_string()))?;
        Ok(body.values)
    }

    async fn write_table(&self, values: Vec<Vec<String>>) -> Result<(), PersistenceError> {
        let payload = ValueRange {
            range: Some(self.config.range.clone()),
            major_dimension: Some("ROWS".into()),
            values,
        };

        let response = self
            .client
            .put(self.values_url())
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("valueInputOption", "RAW"),
            ])
            .json(&payload)
            .send()
            .await
            .map_err(|e| PersistenceError::Connection(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PersistenceError::Connection(format!(
                "sheet write failed with status {}",
                response.status()
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ActivityLogRepository for RemoteSheetLog {
    async fn load_history(&self) -> Result<Vec<ActivityRecord>, PersistenceError> {
        let table = self.read_table().await?;
        parse_table(&table)
    }

    async fn append(&self, rows: &[ActivityRecord]) -> Result<(), PersistenceError> {
        // Read-modify-write: the store has no native append. See the trait
        // docs for the concurrent-finalization caveat.
        let history = self.load_history().await?;
        let table = render_table(history.iter().chain(rows));
        self.write_table(table).await?;
        tracing::debug!(appended = rows.len(), "remote sheet rewritten");
        Ok(())
    }
}

impl Storage {
    /// Build a `Storage` backed by the remote sheet.
    #[must_use]
    pub fn google_sheets(config: SheetsConfig) -> Self {
        Self {
            log: Arc::new(RemoteSheetLog::new(config)),
        }
    }
}

/// Decodes a raw values table: header row first, then one row per record.
///
/// An entirely empty table means the sheet has never been written; a
/// present-but-wrong header row is a schema mismatch.
fn parse_table(values: &[Vec<String>]) -> Result<Vec<ActivityRecord>, PersistenceError> {
    let Some((header, rows)) = values.split_first() else {
        return Ok(Vec::new());
    };

    if header.iter().map(String::as_str).ne(WIRE_COLUMNS) {
        return Err(PersistenceError::Schema(format!(
            "unexpected header row: {header:?}"
        )));
    }

    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        out.push(
            ActivityRecord::from_cells(row)
                .map_err(|e| PersistenceError::Serialization(e.to_string()))?,
        );
    }
    Ok(out)
}

/// Encodes records as the full table to write back: header plus all rows.
fn render_table<'a>(records: impl Iterator<Item = &'a ActivityRecord>) -> Vec<Vec<String>> {
    let mut table = vec![WIRE_COLUMNS.iter().map(ToString::to_string).collect()];
    table.extend(records.map(|r| r.to_cells().to_vec()));
    table
}
