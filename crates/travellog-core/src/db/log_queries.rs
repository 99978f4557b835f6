//! Travel log CRUD operations and list queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Transaction};

use super::{plan_queries::CHECK_PLAN_EXISTS_SQL, timestamp_column};
use crate::{
    error::{DatabaseResultExt, LogbookError, Result},
    models::{
        log::excerpt, summary::EXCERPT_CHARS, LogForm, LogSummary, TravelLog, Visibility, Writer,
    },
    params::{CreateLog, UpdateLog},
};

const INSERT_LOG_SQL: &str = "INSERT INTO logs (plan_id, title, content, visibility, date, writer_email, writer_username, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const INSERT_IMAGE_SQL: &str = "INSERT INTO log_images (log_id, position, name) VALUES (?1, ?2, ?3)";
const DELETE_IMAGES_SQL: &str = "DELETE FROM log_images WHERE log_id = ?1";
const SELECT_IMAGES_SQL: &str = "SELECT name FROM log_images WHERE log_id = ?1 ORDER BY position";
const SELECT_LOG_SQL: &str = "SELECT l.id, l.plan_id, l.title, l.content, l.visibility, l.date, l.writer_email, l.writer_username, l.created_at, l.updated_at, (SELECT COUNT(*) FROM likes k WHERE k.log_id = l.id) FROM logs l WHERE l.id = ?1";
const SELECT_LOG_FIELDS_SQL: &str =
    "SELECT plan_id, title, content, visibility FROM logs WHERE id = ?1";
const UPDATE_LOG_SQL: &str = "UPDATE logs SET plan_id = ?1, title = ?2, content = ?3, visibility = ?4, updated_at = ?5 WHERE id = ?6";
const DELETE_LOG_SQL: &str = "DELETE FROM logs WHERE id = ?1";
pub(super) const CHECK_LOG_VISIBLE_SQL: &str = "SELECT EXISTS(SELECT 1 FROM logs WHERE id = ?1 AND (writer_email = ?2 OR visibility = 'public' OR (visibility = 'friends' AND writer_email IN (SELECT followee_email FROM follows WHERE follower_email = ?2))))";

const SUMMARY_COLUMNS: &str = "id, title, writer_email, writer_username, date, visibility, content, liked, comment_count, cover_image";
const WRITER_FILTER: &str = "writer_email = ?1";
const FRIEND_FILTER: &str = "writer_email IN (SELECT followee_email FROM follows WHERE follower_email = ?1) AND visibility IN ('friends', 'public')";
const LIKED_FILTER: &str = "id IN (SELECT log_id FROM likes WHERE user_email = ?1) AND (writer_email = ?1 OR visibility = 'public' OR (visibility = 'friends' AND writer_email IN (SELECT followee_email FROM follows WHERE follower_email = ?1)))";

fn parse_visibility(row: &rusqlite::Row, index: usize) -> rusqlite::Result<Visibility> {
    let raw: String = row.get(index)?;
    raw.parse::<Visibility>().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            index,
            Type::Text,
            format!("Invalid visibility: {raw}").into(),
        )
    })
}

fn validate_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LogbookError::invalid_input(field).with_reason("Must not be empty"));
    }
    if field == "title" && value.chars().count() > LogForm::MAX_TITLE_CHARS {
        return Err(LogbookError::invalid_input(field).with_reason(format!(
            "Title must be at most {} characters",
            LogForm::MAX_TITLE_CHARS
        )));
    }
    Ok(())
}

fn ensure_plan_exists(tx: &Transaction, plan_id: u64) -> Result<()> {
    let exists: bool = tx
        .query_row(CHECK_PLAN_EXISTS_SQL, params![plan_id as i64], |row| row.get(0))
        .db_context("Failed to check plan existence")?;
    if exists {
        Ok(())
    } else {
        Err(LogbookError::PlanNotFound { id: plan_id })
    }
}

fn insert_images(tx: &Transaction, log_id: u64, images: &[String]) -> Result<()> {
    if images.len() > LogForm::MAX_IMAGES {
        return Err(LogbookError::invalid_input("images")
            .with_reason(format!("At most {} images per log", LogForm::MAX_IMAGES)));
    }
    for (position, name) in images.iter().enumerate() {
        tx.execute(INSERT_IMAGE_SQL, params![log_id as i64, position as i64, name])
            .db_context("Failed to insert log image")?;
    }
    Ok(())
}

impl super::Database {
    fn build_summary_from_row(row: &rusqlite::Row) -> rusqlite::Result<LogSummary> {
        let content: String = row.get(6)?;
        Ok(LogSummary {
            id: row.get::<_, i64>(0)? as u64,
            title: row.get(1)?,
            writer: Writer {
                email: row.get(2)?,
                username: row.get(3)?,
            },
            date: timestamp_column(row, 4)?,
            visibility: parse_visibility(row, 5)?,
            liked: row.get::<_, i64>(7)? as u64,
            comment_count: row.get::<_, i64>(8)? as u64,
            excerpt: excerpt(&content, EXCERPT_CHARS),
            cover_image: row.get(9)?,
        })
    }

    fn query_summaries(&self, filter: &str, email: &str) -> Result<Vec<LogSummary>> {
        let query =
            format!("SELECT {SUMMARY_COLUMNS} FROM log_summaries WHERE {filter} ORDER BY id DESC");
        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let summaries = stmt
            .query_map(params![email], Self::build_summary_from_row)
            .db_context("Failed to query logs")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read log row")?;
        Ok(summaries)
    }

    fn get_images(&self, log_id: u64) -> Result<Vec<String>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_IMAGES_SQL)
            .db_context("Failed to prepare query")?;
        let images = stmt
            .query_map(params![log_id as i64], |row| row.get(0))
            .db_context("Failed to query log images")?
            .collect::<rusqlite::Result<Vec<String>>>()
            .db_context("Failed to read image row")?;
        Ok(images)
    }

    /// Whether `viewer` may read the log: their own, public, or shared with
    /// friends by a writer they follow. A missing log is never visible.
    pub fn can_view_log(&self, id: u64, viewer: &str) -> Result<bool> {
        self.connection
            .query_row(CHECK_LOG_VISIBLE_SQL, params![id as i64, viewer], |row| row.get(0))
            .db_context("Failed to check log visibility")
    }

    /// Publishes a new log written by `writer`.
    pub fn create_log(&mut self, writer: &Writer, log: &CreateLog) -> Result<TravelLog> {
        validate_text("title", &log.title)?;
        validate_text("content", &log.content)?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        ensure_plan_exists(&tx, log.plan_id)?;

        let now = Timestamp::now();
        let now_str = now.to_string();
        tx.execute(
            INSERT_LOG_SQL,
            params![
                log.plan_id as i64,
                log.title,
                log.content,
                log.visibility.as_str(),
                &now_str,
                writer.email,
                writer.username,
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert log")?;
        let id = tx.last_insert_rowid() as u64;

        insert_images(&tx, id, &log.images)?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(TravelLog {
            id,
            plan_id: log.plan_id,
            title: log.title.clone(),
            content: log.content.clone(),
            visibility: log.visibility,
            date: now,
            images: log.images.clone(),
            writer: writer.clone(),
            liked: 0,
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a log with its images, like count and comments.
    pub fn get_log(&self, id: u64) -> Result<Option<TravelLog>> {
        let log = self
            .connection
            .query_row(SELECT_LOG_SQL, params![id as i64], |row| {
                Ok(TravelLog {
                    id: row.get::<_, i64>(0)? as u64,
                    plan_id: row.get::<_, i64>(1)? as u64,
                    title: row.get(2)?,
                    content: row.get(3)?,
                    visibility: parse_visibility(row, 4)?,
                    date: timestamp_column(row, 5)?,
                    images: Vec::new(),
                    writer: Writer {
                        email: row.get(6)?,
                        username: row.get(7)?,
                    },
                    created_at: timestamp_column(row, 8)?,
                    updated_at: timestamp_column(row, 9)?,
                    liked: row.get::<_, i64>(10)? as u64,
                    comments: Vec::new(),
                })
            })
            .optional()
            .db_context("Failed to query log")?;

        let Some(mut log) = log else {
            return Ok(None);
        };
        log.images = self.get_images(log.id)?;
        log.comments = self.get_comments(log.id)?;
        Ok(Some(log))
    }

    /// Retrieves a log as seen by `viewer`. Logs the viewer may not read come
    /// back as `None`, the same as missing ones.
    pub fn get_visible_log(&self, id: u64, viewer: &str) -> Result<Option<TravelLog>> {
        if !self.can_view_log(id, viewer)? {
            return Ok(None);
        }
        self.get_log(id)
    }

    /// Logs written by the user with the given email, newest first.
    pub fn list_logs_by_writer(&self, email: &str) -> Result<Vec<LogSummary>> {
        self.query_summaries(WRITER_FILTER, email)
    }

    /// Non-private logs written by users that `email` follows, newest first.
    pub fn list_friend_logs(&self, email: &str) -> Result<Vec<LogSummary>> {
        self.query_summaries(FRIEND_FILTER, email)
    }

    /// Logs the user with the given email has liked and can still read,
    /// newest first.
    pub fn list_liked_logs(&self, email: &str) -> Result<Vec<LogSummary>> {
        self.query_summaries(LIKED_FILTER, email)
    }

    /// Applies the changes in `update` and returns the updated log.
    pub fn update_log(&mut self, update: &UpdateLog) -> Result<TravelLog> {
        if let Some(title) = &update.title {
            validate_text("title", title)?;
        }
        if let Some(content) = &update.content {
            validate_text("content", content)?;
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current = tx
            .query_row(SELECT_LOG_FIELDS_SQL, params![update.id as i64], |row| {
                Ok((
                    row.get::<_, i64>(0)? as u64,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    parse_visibility(row, 3)?,
                ))
            })
            .optional()
            .db_context("Failed to query log")?;
        let Some((plan_id, title, content, visibility)) = current else {
            return Err(LogbookError::LogNotFound { id: update.id });
        };

        let plan_id = update.plan_id.unwrap_or(plan_id);
        ensure_plan_exists(&tx, plan_id)?;

        tx.execute(
            UPDATE_LOG_SQL,
            params![
                plan_id as i64,
                update.title.as_deref().unwrap_or(&title),
                update.content.as_deref().unwrap_or(&content),
                update.visibility.unwrap_or(visibility).as_str(),
                Timestamp::now().to_string(),
                update.id as i64
            ],
        )
        .db_context("Failed to update log")?;

        if let Some(images) = &update.images {
            tx.execute(DELETE_IMAGES_SQL, params![update.id as i64])
                .db_context("Failed to clear log images")?;
            insert_images(&tx, update.id, images)?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_log(update.id)?
            .ok_or(LogbookError::LogNotFound { id: update.id })
    }

    /// Permanently deletes a log with its images, comments and likes.
    pub fn delete_log(&mut self, id: u64) -> Result<()> {
        let deleted = self
            .connection
            .execute(DELETE_LOG_SQL, params![id as i64])
            .db_context("Failed to delete log")?;
        if deleted == 0 {
            return Err(LogbookError::LogNotFound { id });
        }
        Ok(())
    }
}
