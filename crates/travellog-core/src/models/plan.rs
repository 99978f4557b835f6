//! Travel plan model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A trip that logs are written about.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TravelPlan {
    /// Unique identifier for the plan
    pub id: u64,

    /// Title of the trip
    pub title: String,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,
}
