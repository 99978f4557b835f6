//! Like state of a log for one user.

use serde::{Deserialize, Serialize};

/// Outcome of toggling a like.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LikeStatus {
    pub log_id: u64,
    /// Whether the user likes the log after the toggle
    pub liked: bool,
    /// Total likes on the log after the toggle
    pub count: u64,
}
