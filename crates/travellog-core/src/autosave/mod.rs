//! Debounced draft autosave.
//!
//! Every field edit hands the debouncer a full snapshot of the draft's fields.
//! The debouncer keeps at most one pending save per [`DraftId`]: a new edit
//! cancels the pending save for that draft and starts a fresh window, so a
//! burst of edits produces exactly one call to [`DraftSink::persist_draft`],
//! carrying the snapshot from the last edit.
//!
//! ```text
//! edit(t=0)   edit(t=500)   edit(t=1000)              flush(t=4000)
//!    │────────────┼──────────────┼───────── 3000ms ─────────│
//!    cancelled    cancelled      └── snapshot sent ─────────┘
//! ```
//!
//! There is no cap on deferrals: a user who keeps typing with less than one
//! window between edits postpones the save until they pause.
//!
//! Persist failures are never retried and never surface at the edit call
//! site. They are logged and passed to the optional error callback.
//!
//! Pending saves run as tokio tasks, so scheduling must happen inside a tokio
//! runtime.

mod handle;

#[cfg(test)]
mod tests;

use std::{
    fmt,
    future::Future,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use jiff::Timestamp;

use self::handle::{Slot, SlotTable};
pub use self::handle::PendingSave;
use crate::{
    error::{LogbookError, Result},
    models::{DraftFields, DraftId},
};

/// Delay between the last edit and the save.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(3000);

/// Destination for autosaved drafts.
pub trait DraftSink: Send + Sync + 'static {
    /// Stores `fields` as the current state of draft `id`.
    fn persist_draft(
        &self,
        id: &DraftId,
        fields: &DraftFields,
        saved_at: Timestamp,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// Side channel for persist failures.
pub type ErrorCallback = Arc<dyn Fn(&DraftId, &LogbookError) + Send + Sync>;

/// Autosave settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutosaveConfig {
    /// Quiet period after the last edit before the draft is saved
    pub window: Duration,
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
        }
    }
}

impl AutosaveConfig {
    pub fn with_window_ms(millis: u64) -> Self {
        Self {
            window: Duration::from_millis(millis),
        }
    }
}

struct Inner<S> {
    sink: S,
    window: Duration,
    table: Arc<SlotTable>,
    next_generation: AtomicU64,
    on_error: Option<ErrorCallback>,
}

/// Coalesces rapid draft edits into one delayed save per draft.
///
/// Cloning is cheap and clones share the same pending saves.
pub struct AutosaveDebouncer<S: DraftSink> {
    inner: Arc<Inner<S>>,
}

impl<S: DraftSink> Clone for AutosaveDebouncer<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: DraftSink> fmt::Debug for AutosaveDebouncer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutosaveDebouncer")
            .field("window", &self.inner.window)
            .field("pending", &self.pending_count())
            .finish()
    }
}

impl<S: DraftSink> AutosaveDebouncer<S> {
    pub fn new(sink: S, config: AutosaveConfig) -> Self {
        Self::build(sink, config, None)
    }

    /// Like [`new`](Self::new), with a callback invoked for every failed
    /// persist.
    pub fn with_error_callback(sink: S, config: AutosaveConfig, on_error: ErrorCallback) -> Self {
        Self::build(sink, config, Some(on_error))
    }

    fn build(sink: S, config: AutosaveConfig, on_error: Option<ErrorCallback>) -> Self {
        Self {
            inner: Arc::new(Inner {
                sink,
                window: config.window,
                table: Arc::new(SlotTable::default()),
                next_generation: AtomicU64::new(0),
                on_error,
            }),
        }
    }

    pub fn window(&self) -> Duration {
        self.inner.window
    }

    pub fn sink(&self) -> &S {
        &self.inner.sink
    }

    /// Records an edit to `field` of `draft_id` and (re)starts its save window.
    ///
    /// `latest` must be the complete current field set of the draft; it is
    /// what gets persisted if no newer edit arrives within the window.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn on_field_change(&self, field: &str, draft_id: DraftId, latest: DraftFields) -> PendingSave {
        let generation = self.inner.next_generation.fetch_add(1, Ordering::Relaxed);
        let inner = Arc::clone(&self.inner);
        let task_draft_id = draft_id.clone();

        let mut slots = self.inner.table.lock();
        let task = tokio::spawn(async move {
            tokio::time::sleep(inner.window).await;
            inner.fire(&task_draft_id, generation).await;
        });
        let replaced = slots.insert(
            draft_id.clone(),
            Slot {
                generation,
                fields: latest,
                task,
            },
        );
        drop(slots);

        if let Some(previous) = replaced {
            previous.task.abort();
        }
        log::debug!(
            "Scheduled autosave for draft {draft_id} after change to '{field}' ({}ms)",
            self.inner.window.as_millis()
        );

        PendingSave::new(draft_id, generation, Arc::downgrade(&self.inner.table))
    }

    /// Cancels the pending save for `draft_id`, if any.
    pub fn cancel(&self, draft_id: &DraftId) -> bool {
        match self.inner.table.lock().remove(draft_id) {
            Some(slot) => {
                slot.task.abort();
                true
            }
            None => false,
        }
    }

    /// Cancels every pending save. Returns how many were cancelled.
    pub fn cancel_all(&self) -> usize {
        let drained: Vec<Slot> = self.inner.table.lock().drain().map(|(_, slot)| slot).collect();
        for slot in &drained {
            slot.task.abort();
        }
        drained.len()
    }

    /// Persists the pending snapshot for `draft_id` immediately instead of
    /// waiting for the window. Returns `Ok(false)` when nothing was pending.
    ///
    /// Unlike timer-driven saves, a failure here is returned to the caller.
    pub async fn flush_now(&self, draft_id: &DraftId) -> Result<bool> {
        let Some(slot) = self.inner.table.lock().remove(draft_id) else {
            return Ok(false);
        };
        slot.task.abort();
        self.inner
            .sink
            .persist_draft(draft_id, &slot.fields, Timestamp::now())
            .await?;
        log::info!("Flushed draft {draft_id} on request");
        Ok(true)
    }

    pub fn is_pending(&self, draft_id: &DraftId) -> bool {
        self.inner.table.lock().contains_key(draft_id)
    }

    pub fn pending_count(&self) -> usize {
        self.inner.table.lock().len()
    }
}

impl<S: DraftSink> Inner<S> {
    /// Timer expiry: claim the slot if this generation still owns it, then
    /// persist outside the lock.
    async fn fire(&self, draft_id: &DraftId, generation: u64) {
        let Some(slot) = self.table.take_if_current(draft_id, generation) else {
            return;
        };

        match self
            .sink
            .persist_draft(draft_id, &slot.fields, Timestamp::now())
            .await
        {
            Ok(()) => log::info!("Autosaved draft {draft_id}"),
            Err(e) => {
                log::error!("Autosave of draft {draft_id} failed: {e}");
                if let Some(on_error) = &self.on_error {
                    on_error(draft_id, &e);
                }
            }
        }
    }
}
