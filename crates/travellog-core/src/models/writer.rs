//! Author identity attached to logs and comments.

use serde::{Deserialize, Serialize};

/// Identity attributes of a user, as supplied by the caller.
///
/// The email is the stable key; the username is what gets displayed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Writer {
    pub email: String,
    pub username: String,
}

impl Writer {
    pub fn new(email: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            username: username.into(),
        }
    }

    /// First characters of the username, used as an avatar placeholder.
    pub fn initials(&self, count: usize) -> String {
        self.username.chars().take(count).collect()
    }
}
