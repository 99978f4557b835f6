//! Async facade over the travel log store.
//!
//! [`Logbook`] is the collaborator the session and composer talk to. Each
//! operation opens the SQLite database on a blocking thread, runs one
//! synchronous query method from [`crate::db`], and hands the result back to
//! the async caller. The handle itself only holds the database path, so it is
//! cheap to clone and share.
//!
//! ```rust
//! use travellog_core::{
//!     params::{CreateLog, CreatePlan},
//!     LogbookBuilder, Visibility, Writer,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let logbook = LogbookBuilder::new()
//!     .with_database_path(Some("travellog.db"))
//!     .build()
//!     .await?;
//!
//! let plan = logbook
//!     .create_plan(&CreatePlan {
//!         title: "Jeju in spring".to_string(),
//!     })
//!     .await?;
//!
//! let writer = Writer::new("ana@example.com", "ana");
//! let log = logbook
//!     .create_log(
//!         &writer,
//!         &CreateLog {
//!             plan_id: plan.id,
//!             title: "Day one".to_string(),
//!             content: "<p>Ferry to Udo</p>".to_string(),
//!             visibility: Visibility::Public,
//!             images: vec![],
//!         },
//!     )
//!     .await?;
//! println!("{log}");
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{LogbookError, Result},
};

pub mod builder;
pub mod draft_ops;
pub mod log_ops;
pub mod social_ops;


pub use builder::LogbookBuilder;

/// Handle to a travel log database.
#[derive(Debug, Clone)]
pub struct Logbook {
    db_path: PathBuf,
}

impl Logbook {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Location of the SQLite file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Runs `op` against a fresh connection on the blocking thread pool.
    async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(LogbookError::join)?
    }
}
