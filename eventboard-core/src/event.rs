//! Event records and the drafts they are created from.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{CATEGORIES, PICTURE_SERVICE_URL, PRIORITIES};
use crate::error::{EventBoardError, EventBoardResult};

/// One user-visible event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Opaque document id. Empty until assigned.
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Calendar date, see [`crate::datetime`] for accepted formats
    pub date: String,
    /// Wall-clock time, see [`crate::datetime`] for accepted formats
    pub time: String,
    pub location: String,
    pub category: String,
    pub priority: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

impl EventRecord {
    /// Assign a fresh id if this record doesn't carry one yet.
    pub fn ensure_id(&mut self) {
        if self.id.is_empty() {
            self.id = generate_id();
        }
    }

    pub fn priority_level(&self) -> Priority {
        Priority::from(self.priority.as_str())
    }
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// What the user fills in on the create/edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_priority")]
    pub priority: String,
    #[serde(default)]
    pub picture: Option<String>,
}

impl Default for EventDraft {
    fn default() -> Self {
        EventDraft {
            title: String::new(),
            description: None,
            date: String::new(),
            time: String::new(),
            location: String::new(),
            category: default_category(),
            priority: default_priority(),
            picture: None,
        }
    }
}

fn default_category() -> String {
    CATEGORIES[0].to_string()
}

fn default_priority() -> String {
    PRIORITIES[0].to_string()
}

impl EventDraft {
    /// Pre-fill a draft from an existing record (edit form).
    pub fn from_record(record: &EventRecord) -> Self {
        EventDraft {
            title: record.title.clone(),
            description: record.description.clone(),
            date: record.date.clone(),
            time: record.time.clone(),
            location: record.location.clone(),
            category: record.category.clone(),
            priority: record.priority.clone(),
            picture: record.picture.clone(),
        }
    }

    /// Check the required fields and normalize date and time.
    pub fn validate(mut self) -> EventBoardResult<Self> {
        let mut missing = Vec::new();
        for (name, value) in [
            ("title", &self.title),
            ("date", &self.date),
            ("time", &self.time),
            ("location", &self.location),
        ] {
            if value.trim().is_empty() {
                missing.push(name);
            }
        }
        if !missing.is_empty() {
            return Err(EventBoardError::Validation(format!(
                "{} required",
                missing.join(", ")
            )));
        }

        self.date = crate::datetime::normalize_date(&self.date)?;
        self.time = crate::datetime::normalize_time(&self.time)?;
        self.title = self.title.trim().to_string();
        self.description = self.description.filter(|d| !d.trim().is_empty());
        self.picture = self.picture.filter(|p| !p.trim().is_empty());

        Ok(self)
    }

    /// Turn the draft into a record under `id`, or a fresh id when `None`.
    ///
    /// A missing picture is replaced by a seeded placeholder.
    pub fn into_record(self, id: Option<String>) -> EventRecord {
        let id = id.filter(|i| !i.is_empty()).unwrap_or_else(generate_id);
        let picture = self
            .picture
            .or_else(|| Some(placeholder_picture(&generate_id())));

        EventRecord {
            id,
            title: self.title,
            description: self.description,
            date: self.date,
            time: self.time,
            location: self.location,
            category: self.category,
            priority: self.priority,
            picture,
        }
    }
}

/// Priority as used for display. Unknown strings are kept as `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
    Other(String),
}

impl From<&str> for Priority {
    fn from(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "high" => Priority::High,
            "medium" => Priority::Medium,
            "low" => Priority::Low,
            _ => Priority::Other(s.to_string()),
        }
    }
}

pub fn is_known_category(category: &str) -> bool {
    CATEGORIES.contains(&category)
}

pub fn is_known_priority(priority: &str) -> bool {
    PRIORITIES.contains(&priority)
}

/// Generate a document id (32 lowercase hex chars, valid as an Appwrite id).
pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}

pub fn placeholder_picture(seed: &str) -> String {
    format!("{}/{}/640/480", PICTURE_SERVICE_URL, seed)
}
