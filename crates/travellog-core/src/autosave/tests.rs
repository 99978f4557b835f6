//! Tests for the autosave debouncer.
//!
//! All timing tests run on a paused clock, so sleeps advance virtual time
//! deterministically.

use std::sync::{Arc, Mutex};

use tokio::time::{sleep, Duration, Instant};

use super::*;
use crate::models::draft::fields;

#[derive(Debug, Clone)]
struct Call {
    draft_id: DraftId,
    fields: DraftFields,
    at: Instant,
}

/// Records every persist call; optionally fails them all.
#[derive(Clone, Default)]
struct RecordingSink {
    calls: Arc<Mutex<Vec<Call>>>,
    fail: bool,
}

impl RecordingSink {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl DraftSink for RecordingSink {
    async fn persist_draft(
        &self,
        id: &DraftId,
        fields: &DraftFields,
        _saved_at: Timestamp,
    ) -> Result<()> {
        self.calls.lock().unwrap().push(Call {
            draft_id: id.clone(),
            fields: fields.clone(),
            at: Instant::now(),
        });
        if self.fail {
            return Err(LogbookError::PersistenceFailure {
                draft_id: id.to_string(),
                message: "backend unavailable".to_string(),
            });
        }
        Ok(())
    }
}

fn snapshot(title: &str, content: &str) -> DraftFields {
    DraftFields::from([
        (fields::TITLE.to_string(), title.to_string()),
        (fields::CONTENT.to_string(), content.to_string()),
    ])
}

fn debouncer(sink: &RecordingSink) -> AutosaveDebouncer<RecordingSink> {
    AutosaveDebouncer::new(sink.clone(), AutosaveConfig::default())
}

#[tokio::test(start_paused = true)]
async fn test_burst_of_edits_produces_one_flush_with_last_snapshot() {
    let sink = RecordingSink::default();
    let autosave = debouncer(&sink);
    let draft = DraftId::new("new-1");
    let start = Instant::now();

    let _ = autosave.on_field_change(fields::TITLE, draft.clone(), snapshot("J", ""));
    sleep(Duration::from_millis(500)).await;
    let _ = autosave.on_field_change(fields::TITLE, draft.clone(), snapshot("Jeju", ""));
    sleep(Duration::from_millis(500)).await;
    let _ = autosave.on_field_change(fields::CONTENT, draft.clone(), snapshot("Jeju", "<p>sun</p>"));

    sleep(Duration::from_millis(2999)).await;
    assert!(sink.calls().is_empty(), "saved before the window elapsed");
    assert!(autosave.is_pending(&draft));

    sleep(Duration::from_millis(2)).await;
    let calls = sink.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].draft_id, draft);
    assert_eq!(calls[0].at.duration_since(start), Duration::from_millis(4000));
    assert_eq!(calls[0].fields, snapshot("Jeju", "<p>sun</p>"));
    assert!(!autosave.is_pending(&draft));

    sleep(Duration::from_secs(30)).await;
    assert_eq!(sink.calls().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_drafts_flush_independently() {
    let sink = RecordingSink::default();
    let autosave = debouncer(&sink);
    let a = DraftId::new("new-1");
    let b = DraftId::for_log(7);

    let _ = autosave.on_field_change(fields::TITLE, a.clone(), snapshot("Busan", ""));
    sleep(Duration::from_millis(1000)).await;
    let _ = autosave.on_field_change(fields::TITLE, b.clone(), snapshot("Seoul", ""));
    assert_eq!(autosave.pending_count(), 2);

    sleep(Duration::from_millis(5000)).await;
    let calls = sink.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].draft_id, a);
    assert_eq!(calls[0].fields, snapshot("Busan", ""));
    assert_eq!(calls[1].draft_id, b);
    assert_eq!(calls[1].fields, snapshot("Seoul", ""));
}

#[tokio::test(start_paused = true)]
async fn test_cancel_before_expiry_prevents_flush() {
    let sink = RecordingSink::default();
    let autosave = debouncer(&sink);

    let pending = autosave.on_field_change(fields::TITLE, DraftId::new("new-1"), snapshot("x", ""));
    sleep(Duration::from_millis(1500)).await;
    assert!(pending.is_pending());
    assert!(pending.cancel());
    assert!(!pending.is_pending());

    sleep(Duration::from_secs(10)).await;
    assert!(sink.calls().is_empty());
    assert!(!pending.cancel(), "second cancel must be a no-op");
}

#[tokio::test(start_paused = true)]
async fn test_cancel_after_fire_is_noop() {
    let sink = RecordingSink::default();
    let autosave = debouncer(&sink);

    let pending = autosave.on_field_change(fields::TITLE, DraftId::new("new-1"), snapshot("x", ""));
    sleep(Duration::from_millis(3500)).await;
    assert_eq!(sink.calls().len(), 1);
    assert!(!pending.cancel());
    assert_eq!(sink.calls().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_superseded_handle_does_not_cancel_newer_save() {
    let sink = RecordingSink::default();
    let autosave = debouncer(&sink);
    let draft = DraftId::new("new-1");

    let first = autosave.on_field_change(fields::TITLE, draft.clone(), snapshot("a", ""));
    let _second = autosave.on_field_change(fields::TITLE, draft.clone(), snapshot("ab", ""));
    assert!(!first.cancel());

    sleep(Duration::from_millis(3100)).await;
    let calls = sink.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].fields, snapshot("ab", ""));
}

#[tokio::test(start_paused = true)]
async fn test_continuous_editing_defers_indefinitely() {
    let sink = RecordingSink::default();
    let autosave = debouncer(&sink);
    let draft = DraftId::new("new-1");

    for i in 0..20 {
        let _ = autosave.on_field_change(fields::CONTENT, draft.clone(), snapshot("t", &i.to_string()));
        sleep(Duration::from_millis(2500)).await;
    }
    assert!(sink.calls().is_empty());

    sleep(Duration::from_millis(600)).await;
    let calls = sink.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].fields, snapshot("t", "19"));
}

#[tokio::test(start_paused = true)]
async fn test_failure_reported_once_without_retry() {
    let sink = RecordingSink::failing();
    let errors: Arc<Mutex<Vec<(DraftId, String)>>> = Arc::default();
    let reported = Arc::clone(&errors);
    let autosave = AutosaveDebouncer::with_error_callback(
        sink.clone(),
        AutosaveConfig::default(),
        Arc::new(move |id, err| {
            reported.lock().unwrap().push((id.clone(), err.to_string()));
        }),
    );

    let _ = autosave.on_field_change(fields::TITLE, DraftId::new("new-1"), snapshot("x", ""));
    sleep(Duration::from_secs(60)).await;

    assert_eq!(sink.calls().len(), 1, "failed saves must not be retried");
    let errors = errors.lock().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].0, DraftId::new("new-1"));
    assert!(errors[0].1.contains("backend unavailable"));
}

#[tokio::test(start_paused = true)]
async fn test_configurable_window() {
    let sink = RecordingSink::default();
    let autosave = AutosaveDebouncer::new(sink.clone(), AutosaveConfig::with_window_ms(200));
    let start = Instant::now();

    let _ = autosave.on_field_change(fields::TITLE, DraftId::new("d"), snapshot("x", ""));
    sleep(Duration::from_millis(250)).await;

    let calls = sink.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].at.duration_since(start), Duration::from_millis(200));
}

#[tokio::test(start_paused = true)]
async fn test_flush_now_persists_pending_snapshot() {
    let sink = RecordingSink::default();
    let autosave = debouncer(&sink);
    let draft = DraftId::new("new-1");

    let _ = autosave.on_field_change(fields::TITLE, draft.clone(), snapshot("early", ""));
    assert!(autosave.flush_now(&draft).await.unwrap());
    assert_eq!(sink.calls().len(), 1);

    sleep(Duration::from_secs(5)).await;
    assert_eq!(sink.calls().len(), 1, "timer must not fire after an explicit flush");
    assert!(!autosave.flush_now(&draft).await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_flush_now_returns_failure_to_caller() {
    let sink = RecordingSink::failing();
    let autosave = debouncer(&sink);
    let draft = DraftId::new("new-1");

    let _ = autosave.on_field_change(fields::TITLE, draft.clone(), snapshot("x", ""));
    let err = autosave.flush_now(&draft).await.unwrap_err();
    assert!(matches!(err, LogbookError::PersistenceFailure { .. }));
}

#[tokio::test(start_paused = true)]
async fn test_cancel_all_clears_every_draft() {
    let sink = RecordingSink::default();
    let autosave = debouncer(&sink);

    for id in ["a", "b", "c"] {
        let _ = autosave.on_field_change(fields::TITLE, DraftId::new(id), snapshot(id, ""));
    }
    assert_eq!(autosave.cancel_all(), 3);
    assert_eq!(autosave.pending_count(), 0);
    assert!(!autosave.cancel(&DraftId::new("a")));

    sleep(Duration::from_secs(5)).await;
    assert!(sink.calls().is_empty());
}
