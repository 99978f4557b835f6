//! Travel log model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Comment, Visibility, Writer};

/// A published travel log with its images, likes and comments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TravelLog {
    /// Unique identifier for the log
    pub id: u64,

    /// ID of the travel plan the log belongs to
    pub plan_id: u64,

    /// Title of the log
    pub title: String,

    /// Body markup produced by the rich-text editor. Stored and shown as-is.
    pub content: String,

    /// Who can read the log
    #[serde(default)]
    pub visibility: Visibility,

    /// Publication date (UTC)
    pub date: Timestamp,

    /// Attached image names, in upload order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,

    /// Author of the log
    pub writer: Writer,

    /// Number of likes
    pub liked: u64,

    /// Comments, oldest first (eagerly loaded)
    #[serde(default)]
    pub comments: Vec<Comment>,

    /// Timestamp when the log was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the log was last modified (UTC)
    pub updated_at: Timestamp,
}

impl TravelLog {
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    /// The first `max_chars` characters of the content, with `...` appended
    /// when it was cut.
    pub fn excerpt(&self, max_chars: usize) -> String {
        excerpt(&self.content, max_chars)
    }
}

pub(crate) fn excerpt(content: &str, max_chars: usize) -> String {
    match content.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}
