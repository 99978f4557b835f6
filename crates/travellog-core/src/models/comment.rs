//! Comment model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Writer;

/// A reader's comment on a travel log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    /// Unique identifier for the comment
    pub id: u64,

    /// ID of the log being commented on
    pub log_id: u64,

    /// Who wrote the comment
    pub writer: Writer,

    /// Plain text body
    pub content: String,

    /// Timestamp when the comment was posted (UTC)
    pub date: Timestamp,
}
