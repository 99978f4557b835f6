//! Pending save slots and the cancel handle handed back to callers.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError, Weak},
};

use tokio::task::JoinHandle;

use crate::models::{DraftFields, DraftId};

/// The one live pending save for a draft.
pub(super) struct Slot {
    pub(super) generation: u64,
    pub(super) fields: DraftFields,
    pub(super) task: JoinHandle<()>,
}

/// Draft key to pending slot. `schedule` is the only writer of new slots;
/// `fire` and `cancel` only ever remove the slot whose generation they hold.
#[derive(Default)]
pub(super) struct SlotTable {
    slots: Mutex<HashMap<DraftId, Slot>>,
}

impl SlotTable {
    pub(super) fn lock(&self) -> MutexGuard<'_, HashMap<DraftId, Slot>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Removes the slot for `draft_id` if it still belongs to `generation`.
    pub(super) fn take_if_current(&self, draft_id: &DraftId, generation: u64) -> Option<Slot> {
        let mut slots = self.lock();
        match slots.get(draft_id) {
            Some(slot) if slot.generation == generation => slots.remove(draft_id),
            _ => None,
        }
    }
}

/// Handle to one scheduled autosave.
///
/// Dropping the handle does not cancel the save; call [`PendingSave::cancel`]
/// when the owning context is torn down. Cancelling a save that already fired,
/// was already cancelled, or was superseded by a newer edit does nothing.
#[must_use = "keep the handle to cancel the save on teardown"]
#[derive(Debug, Clone)]
pub struct PendingSave {
    draft_id: DraftId,
    generation: u64,
    table: Weak<SlotTable>,
}

impl PendingSave {
    pub(super) fn new(draft_id: DraftId, generation: u64, table: Weak<SlotTable>) -> Self {
        Self {
            draft_id,
            generation,
            table,
        }
    }

    pub fn draft_id(&self) -> &DraftId {
        &self.draft_id
    }

    /// Cancels the save if it is still pending. Returns whether anything was
    /// cancelled.
    pub fn cancel(&self) -> bool {
        let Some(table) = self.table.upgrade() else {
            return false;
        };
        match table.take_if_current(&self.draft_id, self.generation) {
            Some(slot) => {
                slot.task.abort();
                log::debug!("Cancelled pending autosave for draft {}", self.draft_id);
                true
            }
            None => false,
        }
    }

    /// Whether this particular save is still waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.table.upgrade().is_some_and(|table| {
            table
                .lock()
                .get(&self.draft_id)
                .is_some_and(|slot| slot.generation == self.generation)
        })
    }
}
