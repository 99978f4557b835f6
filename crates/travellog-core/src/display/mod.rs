//! Markdown formatting for travel logs and operation outcomes.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]),
//! while the wrappers in this module add context: list framing with empty
//! handling, creation and update banners, and short status lines. Everything
//! produces markdown so the CLI can hand it to its terminal renderer.
//!
//! ```rust
//! use jiff::Timestamp;
//! use travellog_core::{display::CreateResult, models::TravelPlan};
//!
//! let plan = TravelPlan {
//!     id: 1,
//!     title: "Jeju in spring".to_string(),
//!     created_at: Timestamp::now(),
//! };
//!
//! let output = CreateResult::new(plan).to_string();
//! assert!(output.contains("Created plan with ID: 1"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Drafts, LogSummaries, Plans};
pub use datetime::LocalDateTime;
pub use models::StepIndicator;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
