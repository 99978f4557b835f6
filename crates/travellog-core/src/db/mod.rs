//! Database operations and SQLite management for the travel log store.
//!
//! This module owns the SQLite connection and schema and exposes synchronous
//! query methods, split by concern: plans, logs, social interactions (likes,
//! comments, follows) and drafts. The async [`crate::logbook::Logbook`] wraps
//! them in blocking tasks.

use std::path::Path;

use jiff::Timestamp;
use rusqlite::{types::Type, Connection};

use crate::error::{DatabaseResultExt, Result};

pub mod draft_queries;
pub mod log_queries;
pub mod plan_queries;
pub mod schema;
pub mod social_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Reads an RFC 3339 timestamp column.
pub(crate) fn timestamp_column(row: &rusqlite::Row, index: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(index)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}
