//! Plan and log operations for the Logbook.

use super::Logbook;
use crate::{
    error::{LogbookError, Result},
    models::{LogSummary, TravelLog, TravelPlan, Writer},
    params::{CreateLog, CreatePlan, Id, UpdateLog},
};

impl Logbook {
    /// Creates a travel plan that logs can be attached to.
    pub async fn create_plan(&self, params: &CreatePlan) -> Result<TravelPlan> {
        let title = params.title.clone();
        self.with_database(move |db| db.create_plan(&title)).await
    }

    pub async fn get_plan(&self, params: &Id) -> Result<Option<TravelPlan>> {
        let id = params.id;
        self.with_database(move |db| db.get_plan(id)).await
    }

    pub async fn list_plans(&self) -> Result<Vec<TravelPlan>> {
        self.with_database(|db| db.list_plans()).await
    }

    /// Publishes a log written by `writer`.
    ///
    /// # Errors
    ///
    /// Returns `LogbookError::PlanNotFound` if the plan does not exist and
    /// `LogbookError::InvalidInput` for an empty title or content.
    pub async fn create_log(&self, writer: &Writer, params: &CreateLog) -> Result<TravelLog> {
        let writer = writer.clone();
        let params = params.clone();
        let log = self
            .with_database(move |db| db.create_log(&writer, &params))
            .await?;
        log::info!("Published log {} '{}'", log.id, log.title);
        Ok(log)
    }

    /// Retrieves a log with its images, like count and comments.
    pub async fn get_log(&self, params: &Id) -> Result<Option<TravelLog>> {
        let id = params.id;
        self.with_database(move |db| db.get_log(id)).await
    }

    /// Like [`get_log`](Self::get_log), but a missing log is an error.
    pub async fn fetch_log(&self, params: &Id) -> Result<TravelLog> {
        self.get_log(params)
            .await?
            .ok_or(LogbookError::LogNotFound { id: params.id })
    }

    /// Retrieves a log as `viewer` sees it.
    ///
    /// # Errors
    ///
    /// Returns `LogbookError::LogNotFound` if the log does not exist or
    /// `viewer` may not read it.
    pub async fn fetch_visible_log(&self, params: &Id, viewer: &str) -> Result<TravelLog> {
        let id = params.id;
        let viewer = viewer.to_string();
        self.with_database(move |db| db.get_visible_log(id, &viewer))
            .await?
            .ok_or(LogbookError::LogNotFound { id })
    }

    /// Logs written by the user with `email`, newest first.
    pub async fn list_logs(&self, email: &str) -> Result<Vec<LogSummary>> {
        let email = email.to_string();
        self.with_database(move |db| db.list_logs_by_writer(&email))
            .await
    }

    /// Non-private logs of the users `email` follows, newest first.
    pub async fn list_friend_logs(&self, email: &str) -> Result<Vec<LogSummary>> {
        let email = email.to_string();
        self.with_database(move |db| db.list_friend_logs(&email)).await
    }

    /// Logs `email` has liked, newest first.
    pub async fn list_liked_logs(&self, email: &str) -> Result<Vec<LogSummary>> {
        let email = email.to_string();
        self.with_database(move |db| db.list_liked_logs(&email)).await
    }

    /// Applies an edit and returns the stored result.
    ///
    /// # Errors
    ///
    /// Returns `LogbookError::InvalidInput` if `params` changes nothing.
    pub async fn update_log(&self, params: &UpdateLog) -> Result<TravelLog> {
        if !params.has_changes() {
            return Err(LogbookError::invalid_input("update").with_reason("No changes given"));
        }
        let params = params.clone();
        let log = self.with_database(move |db| db.update_log(&params)).await?;
        log::info!("Updated log {}", log.id);
        Ok(log)
    }

    /// Deletes a log together with its images, comments and likes, returning
    /// the log as it was.
    pub async fn delete_log(&self, params: &Id) -> Result<TravelLog> {
        let id = params.id;
        let log = self
            .with_database(move |db| {
                let log = db.get_log(id)?.ok_or(LogbookError::LogNotFound { id })?;
                db.delete_log(id)?;
                Ok(log)
            })
            .await?;
        log::info!("Deleted log {id}");
        Ok(log)
    }
}
