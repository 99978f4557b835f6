//! Data models for travel logs, plans, comments and drafts.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so that data structures stay separate from
//! presentation. All models format as markdown for the terminal renderer.
//!
//! # Examples
//!
//! ```rust
//! use travellog_core::models::{LogForm, Visibility};
//!
//! let mut form = LogForm::default();
//! assert_eq!(form.visibility, Visibility::Private);
//!
//! form.plan_id = Some(1);
//! form.title = "Jeju, day one".to_string();
//! form.content = "<p>Sunrise at Seongsan</p>".to_string();
//! assert!(form.validate_for_submit().is_ok());
//! ```

pub mod comment;
pub mod draft;
pub mod form;
pub mod like;
pub mod log;
pub mod plan;
pub mod summary;
pub mod visibility;
pub mod writer;


pub use comment::Comment;
pub use draft::{DraftFields, DraftId, DraftRecord};
pub use form::{ImageUpload, LogForm};
pub use like::LikeStatus;
pub use log::TravelLog;
pub use plan::TravelPlan;
pub use summary::LogSummary;
pub use visibility::Visibility;
pub use writer::Writer;
