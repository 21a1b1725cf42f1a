//! Memory record types
//!
//! Defines the stored memory note and the client-side search over a list of them.

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A memory note persisted by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryRecord {
    /// Unique identifier
    pub id: i64,
    /// Text of the memory
    pub content: String,
    /// Conversation the memory was extracted from, if the backend sent one
    #[serde(default)]
    pub conversation_id: Option<i64>,
    /// Creation timestamp as sent by the backend
    #[serde(default)]
    pub created_at: String,
}

impl MemoryRecord {
    /// Decode one record, returning `None` for anything without an `id` and
    /// `content`. Missing or null metadata falls back to defaults.
    pub fn from_value(value: Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }

    /// Decode a list body. Elements that are not records are skipped and a
    /// non-array body yields an empty list.
    pub fn list_from_value(value: Value) -> Vec<Self> {
        match value {
            Value::Array(items) => {
                let total = items.len();
                let records: Vec<Self> = items.into_iter().filter_map(Self::from_value).collect();
                if records.len() != total {
                    tracing::warn!(
                        "Skipped {} malformed memory records",
                        total - records.len()
                    );
                }
                records
            }
            other => {
                tracing::debug!("Memory body is not an array: {}", other);
                Vec::new()
            }
        }
    }

    /// Whether the content matches a search query (case-insensitive).
    ///
    /// An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty() || self.content.to_lowercase().contains(&query.to_lowercase())
    }

    /// Creation time formatted for display, or the raw string if it is not RFC 3339.
    pub fn created_label(&self) -> String {
        DateTime::parse_from_rfc3339(&self.created_at)
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|_| self.created_at.clone())
    }
}

/// Records whose content matches `query`, in their original order.
pub fn filter_records<'a>(records: &'a [MemoryRecord], query: &str) -> Vec<&'a MemoryRecord> {
    records.iter().filter(|record| record.matches(query)).collect()
}

/// Body of a memory update request
#[derive(Debug, Clone, Serialize)]
pub struct MemoryUpdate<'a> {
    pub content: &'a str,
}
