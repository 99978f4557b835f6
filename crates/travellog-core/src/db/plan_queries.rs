//! Travel plan queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::timestamp_column;
use crate::{
    error::{DatabaseResultExt, LogbookError, Result},
    models::TravelPlan,
};

const INSERT_PLAN_SQL: &str = "INSERT INTO plans (title, created_at) VALUES (?1, ?2)";
const SELECT_PLAN_SQL: &str = "SELECT id, title, created_at FROM plans WHERE id = ?1";
const SELECT_PLANS_SQL: &str = "SELECT id, title, created_at FROM plans ORDER BY id";
pub(super) const CHECK_PLAN_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM plans WHERE id = ?1)";

impl super::Database {
    fn build_plan_from_row(row: &rusqlite::Row) -> rusqlite::Result<TravelPlan> {
        Ok(TravelPlan {
            id: row.get::<_, i64>(0)? as u64,
            title: row.get(1)?,
            created_at: timestamp_column(row, 2)?,
        })
    }

    /// Creates a new travel plan.
    pub fn create_plan(&mut self, title: &str) -> Result<TravelPlan> {
        if title.trim().is_empty() {
            return Err(LogbookError::invalid_input("title").with_reason("Plan title is required"));
        }

        let now = Timestamp::now();
        self.connection
            .execute(INSERT_PLAN_SQL, params![title, now.to_string()])
            .db_context("Failed to insert plan")?;

        Ok(TravelPlan {
            id: self.connection.last_insert_rowid() as u64,
            title: title.to_string(),
            created_at: now,
        })
    }

    /// Retrieves a plan by its ID.
    pub fn get_plan(&self, id: u64) -> Result<Option<TravelPlan>> {
        self.connection
            .query_row(SELECT_PLAN_SQL, params![id as i64], Self::build_plan_from_row)
            .optional()
            .db_context("Failed to query plan")
    }

    /// Lists all plans, oldest first.
    pub fn list_plans(&self) -> Result<Vec<TravelPlan>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLANS_SQL)
            .db_context("Failed to prepare query")?;

        let plans = stmt
            .query_map([], Self::build_plan_from_row)
            .db_context("Failed to query plans")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read plan row")?;
        Ok(plans)
    }
}
