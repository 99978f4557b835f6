//! Draft storage for autosaved edits.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::timestamp_column;
use crate::{
    error::{DatabaseResultExt, Result},
    models::{DraftFields, DraftId, DraftRecord},
};

const UPSERT_DRAFT_SQL: &str = "INSERT INTO drafts (id, fields, last_saved_at) VALUES (?1, ?2, ?3) ON CONFLICT(id) DO UPDATE SET fields = excluded.fields, last_saved_at = excluded.last_saved_at";
const SELECT_DRAFT_SQL: &str = "SELECT id, fields, last_saved_at FROM drafts WHERE id = ?1";
const SELECT_DRAFTS_SQL: &str = "SELECT id, fields, last_saved_at FROM drafts ORDER BY id";
const DELETE_DRAFT_SQL: &str = "DELETE FROM drafts WHERE id = ?1";

impl super::Database {
    fn build_draft_from_row(row: &rusqlite::Row) -> rusqlite::Result<(String, String, Timestamp)> {
        Ok((row.get(0)?, row.get(1)?, timestamp_column(row, 2)?))
    }

    fn decode_draft((id, fields, saved_at): (String, String, Timestamp)) -> Result<DraftRecord> {
        Ok(DraftRecord {
            id: DraftId(id),
            fields: serde_json::from_str(&fields)?,
            last_saved_at: Some(saved_at),
        })
    }

    /// Stores the latest field snapshot of a draft, replacing any earlier one.
    pub fn save_draft(&self, id: &DraftId, fields: &DraftFields, saved_at: Timestamp) -> Result<()> {
        let encoded = serde_json::to_string(fields)?;
        self.connection
            .execute(
                UPSERT_DRAFT_SQL,
                params![id.as_str(), encoded, saved_at.to_string()],
            )
            .db_context("Failed to save draft")?;
        Ok(())
    }

    /// Retrieves a draft by its ID.
    pub fn get_draft(&self, id: &DraftId) -> Result<Option<DraftRecord>> {
        let row = self
            .connection
            .query_row(SELECT_DRAFT_SQL, params![id.as_str()], Self::build_draft_from_row)
            .optional()
            .db_context("Failed to query draft")?;
        row.map(Self::decode_draft).transpose()
    }

    /// Lists every stored draft ordered by ID.
    pub fn list_drafts(&self) -> Result<Vec<DraftRecord>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_DRAFTS_SQL)
            .db_context("Failed to prepare query")?;
        let rows = stmt
            .query_map([], Self::build_draft_from_row)
            .db_context("Failed to query drafts")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read draft row")?;
        rows.into_iter().map(Self::decode_draft).collect()
    }

    /// Removes a draft. Returns false if there was none.
    pub fn delete_draft(&self, id: &DraftId) -> Result<bool> {
        let deleted = self
            .connection
            .execute(DELETE_DRAFT_SQL, params![id.as_str()])
            .db_context("Failed to delete draft")?;
        Ok(deleted > 0)
    }
}
