//! Visibility settings for published logs.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Who can read a published travel log.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Only the writer
    #[default]
    Private,

    /// The writer's followers
    Friends,

    /// Everyone
    Public,
}

impl FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "private" => Ok(Visibility::Private),
            "friends" => Ok(Visibility::Friends),
            "public" => Ok(Visibility::Public),
            _ => Err(format!("Invalid visibility: {s}")),
        }
    }
}

impl Visibility {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Private => "private",
            Visibility::Friends => "friends",
            Visibility::Public => "public",
        }
    }

    /// Whether followers of the writer may read the log.
    pub fn visible_to_friends(&self) -> bool {
        matches!(self, Visibility::Friends | Visibility::Public)
    }
}
