//! Wire shape of event documents in the hosted collection.
//!
//! This is the only place raw JSON from the document service is looked at.
//! Everything past here works with [`EventRecord`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::event::EventRecord;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct DecodeError(pub String);

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError(err.to_string())
    }
}

/// A document as returned by the service.
///
/// Platform metadata other than `$id` (`$createdAt`, `$permissions`, ...) is ignored.
/// Absent or null business fields decode as empty strings.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

impl Document {
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        let doc: Document = serde_json::from_value(value)?;
        if doc.id.is_empty() {
            return Err(DecodeError("document has an empty $id".to_string()));
        }
        Ok(doc)
    }

    pub fn into_record(self) -> EventRecord {
        EventRecord {
            id: self.id,
            title: self.title.unwrap_or_default(),
            description: self.description.filter(|d| !d.is_empty()),
            date: self.date.unwrap_or_default(),
            time: self.time.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            priority: self.priority.unwrap_or_default(),
            picture: self.picture.filter(|p| !p.is_empty()),
        }
    }
}

/// Decode one raw document into a record.
pub fn decode_record(value: Value) -> Result<EventRecord, DecodeError> {
    Document::from_value(value).map(Document::into_record)
}

/// One page of a list response.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentList {
    pub total: u64,
    pub documents: Vec<Value>,
}

impl DocumentList {
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Decode every document, skipping the ones that fail with a warning.
    pub fn into_records(self) -> Vec<EventRecord> {
        self.documents
            .into_iter()
            .filter_map(|doc| match decode_record(doc) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping malformed document");
                    None
                }
            })
            .collect()
    }
}

/// Business fields sent on create and update. The id travels separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentData {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub category: String,
    pub priority: String,
    pub picture: String,
}

impl From<&EventRecord> for DocumentData {
    fn from(record: &EventRecord) -> Self {
        DocumentData {
            title: record.title.clone(),
            description: record.description.clone().unwrap_or_default(),
            date: record.date.clone(),
            time: record.time.clone(),
            location: record.location.clone(),
            category: record.category.clone(),
            priority: record.priority.clone(),
            picture: record.picture.clone().unwrap_or_default(),
        }
    }
}
