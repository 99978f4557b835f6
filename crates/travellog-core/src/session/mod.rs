//! Owned application state for one signed-in user.
//!
//! [`LogSession`] holds what the browsing screens show: the user's own logs,
//! their friends' logs, the logs they liked and the log currently open. It is
//! created by the caller and passed where needed; nothing here is global.
//! Lists are only reloaded when one of the `refresh_*` methods is called.
//! Mutating operations write through the [`Logbook`] and then patch the
//! in-memory state in place so the open log does not need a refetch.

use std::collections::HashSet;

use crate::{
    error::{LogbookError, Result},
    logbook::Logbook,
    models::{Comment, LikeStatus, LogSummary, TravelLog, Writer},
    params::{AddComment, Id},
};


/// Per-user view of the travel log store.
#[derive(Debug)]
pub struct LogSession {
    logbook: Logbook,
    identity: Writer,
    logs: Vec<LogSummary>,
    friend_logs: Vec<LogSummary>,
    liked_logs: Vec<LogSummary>,
    liked_ids: HashSet<u64>,
    current: Option<TravelLog>,
}

impl LogSession {
    /// Starts an empty session. Call the `refresh_*` methods to load state.
    pub fn new(logbook: Logbook, identity: Writer) -> Self {
        Self {
            logbook,
            identity,
            logs: Vec::new(),
            friend_logs: Vec::new(),
            liked_logs: Vec::new(),
            liked_ids: HashSet::new(),
            current: None,
        }
    }

    pub fn identity(&self) -> &Writer {
        &self.identity
    }

    pub fn logbook(&self) -> &Logbook {
        &self.logbook
    }

    /// The user's own logs as of the last refresh.
    pub fn logs(&self) -> &[LogSummary] {
        &self.logs
    }

    pub fn friend_logs(&self) -> &[LogSummary] {
        &self.friend_logs
    }

    pub fn liked_logs(&self) -> &[LogSummary] {
        &self.liked_logs
    }

    pub fn current(&self) -> Option<&TravelLog> {
        self.current.as_ref()
    }

    pub fn is_liked(&self, log_id: u64) -> bool {
        self.liked_ids.contains(&log_id)
    }

    /// Reloads the user's own logs.
    pub async fn refresh_logs(&mut self) -> Result<&[LogSummary]> {
        self.logs = self.logbook.list_logs(&self.identity.email).await?;
        Ok(&self.logs)
    }

    /// Reloads the liked logs and the liked-id set together.
    pub async fn refresh_liked(&mut self) -> Result<&[LogSummary]> {
        let email = &self.identity.email;
        self.liked_ids = self.logbook.liked_log_ids(email).await?;
        self.liked_logs = self.logbook.list_liked_logs(email).await?;
        Ok(&self.liked_logs)
    }

    pub async fn refresh_friend_logs(&mut self) -> Result<&[LogSummary]> {
        self.friend_logs = self.logbook.list_friend_logs(&self.identity.email).await?;
        Ok(&self.friend_logs)
    }

    /// Loads a log and makes it the current one.
    ///
    /// # Errors
    ///
    /// Returns `LogbookError::LogNotFound` if there is no such log or the
    /// user may not read it; the previously open log stays current in that
    /// case.
    pub async fn open_log(&mut self, log_id: u64) -> Result<&TravelLog> {
        let log = self
            .logbook
            .fetch_visible_log(&Id { id: log_id }, &self.identity.email)
            .await?;
        Ok(self.current.insert(log))
    }

    pub fn close_log(&mut self) -> Option<TravelLog> {
        self.current.take()
    }

    /// Flips the user's like on a log and patches every copy of its count.
    ///
    /// Removing a like drops the log from the liked list right away. A new
    /// like shows up there on the next [`refresh_liked`](Self::refresh_liked).
    pub async fn toggle_like(&mut self, log_id: u64) -> Result<LikeStatus> {
        let status = self
            .logbook
            .toggle_like(&Id { id: log_id }, &self.identity.email)
            .await?;

        if status.liked {
            self.liked_ids.insert(log_id);
        } else {
            self.liked_ids.remove(&log_id);
            self.liked_logs.retain(|log| log.id != log_id);
        }

        if let Some(current) = self.current.as_mut().filter(|log| log.id == log_id) {
            current.liked = status.count;
        }
        for summary in self.summaries_mut(log_id) {
            summary.liked = status.count;
        }
        Ok(status)
    }

    /// Posts a comment as the session user and appends it to the open log.
    pub async fn add_comment(&mut self, log_id: u64, content: &str) -> Result<Comment> {
        let comment = self
            .logbook
            .add_comment(
                &self.identity,
                &AddComment {
                    log_id,
                    content: content.to_string(),
                },
            )
            .await?;

        if let Some(current) = self.current.as_mut().filter(|log| log.id == log_id) {
            current.comments.push(comment.clone());
        }
        for summary in self.summaries_mut(log_id) {
            summary.comment_count += 1;
        }
        Ok(comment)
    }

    /// Deletes one of the user's own logs.
    ///
    /// # Errors
    ///
    /// Returns `LogbookError::InvalidInput` when the log belongs to someone
    /// else, or `LogbookError::LogNotFound` if the user cannot see it at all.
    pub async fn delete_log(&mut self, log_id: u64) -> Result<TravelLog> {
        let log = self
            .logbook
            .fetch_visible_log(&Id { id: log_id }, &self.identity.email)
            .await?;
        if log.writer.email != self.identity.email {
            return Err(LogbookError::invalid_input("id")
                .with_reason(format!("Log {log_id} was written by someone else")));
        }

        let deleted = self.logbook.delete_log(&Id { id: log_id }).await?;
        self.logs.retain(|log| log.id != log_id);
        self.friend_logs.retain(|log| log.id != log_id);
        self.liked_logs.retain(|log| log.id != log_id);
        self.liked_ids.remove(&log_id);
        if self.current.as_ref().is_some_and(|log| log.id == log_id) {
            self.current = None;
        }
        Ok(deleted)
    }

    fn summaries_mut(&mut self, log_id: u64) -> impl Iterator<Item = &mut LogSummary> {
        self.logs
            .iter_mut()
            .chain(self.friend_logs.iter_mut())
            .chain(self.liked_logs.iter_mut())
            .filter(move |summary| summary.id == log_id)
    }
}
