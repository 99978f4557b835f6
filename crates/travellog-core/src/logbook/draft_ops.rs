//! Draft storage, and the autosave sink backed by it.

use jiff::Timestamp;

use super::Logbook;
use crate::{
    autosave::DraftSink,
    error::{LogbookError, Result},
    models::{DraftFields, DraftId, DraftRecord},
};

impl Logbook {
    /// Upserts the field snapshot of a draft.
    pub async fn save_draft(
        &self,
        id: &DraftId,
        fields: &DraftFields,
        saved_at: Timestamp,
    ) -> Result<()> {
        let id = id.clone();
        let fields = fields.clone();
        self.with_database(move |db| db.save_draft(&id, &fields, saved_at))
            .await
    }

    pub async fn get_draft(&self, id: &DraftId) -> Result<Option<DraftRecord>> {
        let id = id.clone();
        self.with_database(move |db| db.get_draft(&id)).await
    }

    pub async fn list_drafts(&self) -> Result<Vec<DraftRecord>> {
        self.with_database(|db| db.list_drafts()).await
    }

    /// Removes a draft.
    ///
    /// # Errors
    ///
    /// Returns `LogbookError::DraftNotFound` if there is no such draft.
    pub async fn delete_draft(&self, id: &DraftId) -> Result<()> {
        let key = id.clone();
        let deleted = self.with_database(move |db| db.delete_draft(&key)).await?;
        if deleted {
            Ok(())
        } else {
            Err(LogbookError::DraftNotFound {
                id: id.to_string(),
            })
        }
    }

    /// Removes a draft if present. Returns whether one existed.
    pub async fn discard_draft(&self, id: &DraftId) -> Result<bool> {
        let id = id.clone();
        self.with_database(move |db| db.delete_draft(&id)).await
    }
}

impl DraftSink for Logbook {
    async fn persist_draft(
        &self,
        id: &DraftId,
        fields: &DraftFields,
        saved_at: Timestamp,
    ) -> Result<()> {
        self.save_draft(id, fields, saved_at)
            .await
            .map_err(|e| LogbookError::PersistenceFailure {
                draft_id: id.to_string(),
                message: e.to_string(),
            })
    }
}
