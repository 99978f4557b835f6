//! Core library for the Travellog travel journal.
//!
//! Users attach travel logs to travel plans, write them through a three-step
//! wizard, and browse, like and comment on their own and their friends' logs.
//! This crate holds everything below the user interface:
//!
//! - [`wizard`]: a bounded step navigator and the [`LogStep`] sequence
//! - [`autosave`]: keyed, cancellable, last-edit-wins draft saving
//! - [`db`] and [`logbook`]: the SQLite store and its async facade
//! - [`session`]: the signed-in user's browsing state
//! - [`composer`]: the add and edit screen logic
//! - [`models`], [`params`] and [`display`]: data, inputs and markdown output
//!
//! # Quick Start
//!
//! ```rust
//! use travellog_core::{params::CreatePlan, LogbookBuilder, LogSession, Writer};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let logbook = LogbookBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! let plan = logbook
//!     .create_plan(&CreatePlan {
//!         title: "Jeju in spring".to_string(),
//!     })
//!     .await?;
//! println!("{plan}");
//!
//! let mut session = LogSession::new(logbook, Writer::new("ana@example.com", "ana"));
//! for log in session.refresh_logs().await? {
//!     println!("{log}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod autosave;
pub mod composer;
pub mod db;
pub mod display;
pub mod error;
pub mod logbook;
pub mod models;
pub mod params;
pub mod session;
pub mod wizard;

// Re-export commonly used types
pub use autosave::{AutosaveConfig, AutosaveDebouncer, DraftSink, PendingSave};
pub use composer::LogComposer;
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, Drafts, LocalDateTime, LogSummaries, OperationStatus, Plans,
    StepIndicator, UpdateResult,
};
pub use error::{LogbookError, Result};
pub use logbook::{Logbook, LogbookBuilder};
pub use models::{
    Comment, DraftFields, DraftId, DraftRecord, ImageUpload, LikeStatus, LogForm, LogSummary,
    TravelLog, TravelPlan, Visibility, Writer,
};
pub use session::LogSession;
pub use wizard::{LogStep, StepAction, StepSequence, Wizard, WizardState};
