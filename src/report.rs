//! Rendering pipeline results for display

use serde::Serialize;

use crate::pipeline::{Entry, Outcome};

/// Presentation view of a single processed base password
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub base: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&Entry> for Row {
    fn from(entry: &Entry) -> Self {
        Self {
            base: entry.base.clone(),
            hash: Some(entry.record.to_string()),
            cost: Some(entry.record.cost()),
            error: None,
        }
    }
}

impl From<&Outcome> for Row {
    fn from(outcome: &Outcome) -> Self {
        match &outcome.result {
            Ok(record) => Self {
                base: outcome.base.clone(),
                hash: Some(record.to_string()),
                cost: Some(record.cost()),
                error: None,
            },
            Err(e) => Self {
                base: outcome.base.clone(),
                hash: None,
                cost: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Plain-text listing, one block per base password, each followed by a blank line
pub fn render_text(rows: &[Row]) -> String {
    rows.iter()
        .map(|row| match (&row.hash, &row.error) {
            (Some(hash), _) => format!(
                "Base Password: {}\nHashed Password: {}\n\n",
                row.base, hash
            ),
            (None, Some(error)) => format!("Base Password: {}\nError: {}\n\n", row.base, error),
            (None, None) => format!("Base Password: {}\n\n", row.base),
        })
        .collect()
}

/// Pretty-printed JSON array
pub fn render_json(rows: &[Row]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rows)
}
