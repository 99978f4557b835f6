//! Log summary types for list views.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{log::excerpt, TravelLog, Visibility, Writer};

/// Characters of content kept in a list excerpt.
pub const EXCERPT_CHARS: usize = 200;

/// Compact view of a travel log with engagement counts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogSummary {
    /// Log ID
    pub id: u64,
    /// Title of the log
    pub title: String,
    /// Author
    pub writer: Writer,
    /// Publication date
    pub date: Timestamp,
    /// Visibility setting
    pub visibility: Visibility,
    /// Number of likes
    pub liked: u64,
    /// Number of comments
    pub comment_count: u64,
    /// Leading part of the content markup
    pub excerpt: String,
    /// First attached image, used as the thumbnail
    pub cover_image: Option<String>,
}

impl From<&TravelLog> for LogSummary {
    fn from(log: &TravelLog) -> Self {
        Self {
            id: log.id,
            title: log.title.clone(),
            writer: log.writer.clone(),
            date: log.date,
            visibility: log.visibility,
            liked: log.liked,
            comment_count: log.comments.len() as u64,
            excerpt: excerpt(&log.content, EXCERPT_CHARS),
            cover_image: log.images.first().cloned(),
        }
    }
}
