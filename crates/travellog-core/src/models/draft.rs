//! Draft records written by the autosave debouncer.

use std::{collections::BTreeMap, fmt};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Field names used by the authoring screens.
pub mod fields {
    pub const TITLE: &str = "title";
    pub const CONTENT: &str = "content";
}

/// Field name to value mapping of an in-progress log.
pub type DraftFields = BTreeMap<String, String>;

/// Identifier of a draft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct DraftId(pub String);

impl DraftId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Draft key for a log that has not been published yet.
    pub fn for_new_log(plan_id: Option<u64>) -> Self {
        match plan_id {
            Some(plan_id) => Self(format!("new-{plan_id}")),
            None => Self("new".to_string()),
        }
    }

    /// Draft key for edits to an existing log.
    pub fn for_log(log_id: u64) -> Self {
        Self(format!("log-{log_id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DraftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DraftId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// An in-progress, not yet published set of field edits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DraftRecord {
    pub id: DraftId,
    pub fields: DraftFields,
    /// When the last autosave landed, absent until the first flush
    pub last_saved_at: Option<Timestamp>,
}

impl DraftRecord {
    pub fn new(id: DraftId) -> Self {
        Self {
            id,
            fields: DraftFields::new(),
            last_saved_at: None,
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}
