//! Likes, comments and follows.

use std::collections::HashSet;

use jiff::Timestamp;
use rusqlite::params;

use super::{log_queries::CHECK_LOG_VISIBLE_SQL, timestamp_column};
use crate::{
    error::{DatabaseResultExt, LogbookError, Result},
    models::{Comment, LikeStatus, Writer},
};

const SELECT_LIKE_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM likes WHERE log_id = ?1 AND user_email = ?2)";
const INSERT_LIKE_SQL: &str = "INSERT INTO likes (log_id, user_email, created_at) VALUES (?1, ?2, ?3)";
const DELETE_LIKE_SQL: &str = "DELETE FROM likes WHERE log_id = ?1 AND user_email = ?2";
const COUNT_LIKES_SQL: &str = "SELECT COUNT(*) FROM likes WHERE log_id = ?1";
const SELECT_LIKED_IDS_SQL: &str = "SELECT log_id FROM likes WHERE user_email = ?1";
const INSERT_COMMENT_SQL: &str = "INSERT INTO comments (log_id, writer_email, writer_username, content, date) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_COMMENTS_SQL: &str = "SELECT id, log_id, writer_email, writer_username, content, date FROM comments WHERE log_id = ?1 ORDER BY id";
const INSERT_FOLLOW_SQL: &str = "INSERT OR IGNORE INTO follows (follower_email, followee_email, created_at) VALUES (?1, ?2, ?3)";
const SELECT_FOLLOWEES_SQL: &str =
    "SELECT followee_email FROM follows WHERE follower_email = ?1 ORDER BY followee_email";

impl super::Database {
    /// Likes the log for `email`, or removes the like if it exists. Logs
    /// `email` may not read are reported as not found.
    pub fn toggle_like(&mut self, log_id: u64, email: &str) -> Result<LikeStatus> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let visible: bool = tx
            .query_row(CHECK_LOG_VISIBLE_SQL, params![log_id as i64, email], |row| {
                row.get(0)
            })
            .db_context("Failed to check log visibility")?;
        if !visible {
            return Err(LogbookError::LogNotFound { id: log_id });
        }

        let already_liked: bool = tx
            .query_row(SELECT_LIKE_SQL, params![log_id as i64, email], |row| row.get(0))
            .db_context("Failed to query like")?;

        if already_liked {
            tx.execute(DELETE_LIKE_SQL, params![log_id as i64, email])
                .db_context("Failed to remove like")?;
        } else {
            tx.execute(
                INSERT_LIKE_SQL,
                params![log_id as i64, email, Timestamp::now().to_string()],
            )
            .db_context("Failed to insert like")?;
        }

        let count: i64 = tx
            .query_row(COUNT_LIKES_SQL, params![log_id as i64], |row| row.get(0))
            .db_context("Failed to count likes")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(LikeStatus {
            log_id,
            liked: !already_liked,
            count: count as u64,
        })
    }

    /// IDs of every log `email` has liked.
    pub fn liked_log_ids(&self, email: &str) -> Result<HashSet<u64>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_LIKED_IDS_SQL)
            .db_context("Failed to prepare query")?;
        let ids = stmt
            .query_map(params![email], |row| row.get::<_, i64>(0).map(|id| id as u64))
            .db_context("Failed to query likes")?
            .collect::<rusqlite::Result<HashSet<_>>>()
            .db_context("Failed to read like row")?;
        Ok(ids)
    }

    /// Adds a comment by `writer` to a log they can read.
    pub fn add_comment(&mut self, log_id: u64, writer: &Writer, content: &str) -> Result<Comment> {
        if content.trim().is_empty() {
            return Err(LogbookError::invalid_input("content").with_reason("Comment is empty"));
        }
        if !self.can_view_log(log_id, &writer.email)? {
            return Err(LogbookError::LogNotFound { id: log_id });
        }

        let now = Timestamp::now();
        self.connection
            .execute(
                INSERT_COMMENT_SQL,
                params![
                    log_id as i64,
                    writer.email,
                    writer.username,
                    content,
                    now.to_string()
                ],
            )
            .db_context("Failed to insert comment")?;

        Ok(Comment {
            id: self.connection.last_insert_rowid() as u64,
            log_id,
            writer: writer.clone(),
            content: content.to_string(),
            date: now,
        })
    }

    /// Comments on a log, oldest first.
    pub fn get_comments(&self, log_id: u64) -> Result<Vec<Comment>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_COMMENTS_SQL)
            .db_context("Failed to prepare query")?;
        let comments = stmt
            .query_map(params![log_id as i64], |row| {
                Ok(Comment {
                    id: row.get::<_, i64>(0)? as u64,
                    log_id: row.get::<_, i64>(1)? as u64,
                    writer: Writer {
                        email: row.get(2)?,
                        username: row.get(3)?,
                    },
                    content: row.get(4)?,
                    date: timestamp_column(row, 5)?,
                })
            })
            .db_context("Failed to query comments")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read comment row")?;
        Ok(comments)
    }

    /// Makes `follower` follow `followee`. Returns false if already following.
    pub fn follow(&mut self, follower: &str, followee: &str) -> Result<bool> {
        if follower == followee {
            return Err(LogbookError::invalid_input("email").with_reason("Cannot follow yourself"));
        }
        let inserted = self
            .connection
            .execute(
                INSERT_FOLLOW_SQL,
                params![follower, followee, Timestamp::now().to_string()],
            )
            .db_context("Failed to insert follow")?;
        Ok(inserted > 0)
    }

    /// Emails of the users `follower` follows.
    pub fn followees(&self, follower: &str) -> Result<Vec<String>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_FOLLOWEES_SQL)
            .db_context("Failed to prepare query")?;
        let followees = stmt
            .query_map(params![follower], |row| row.get(0))
            .db_context("Failed to query follows")?
            .collect::<rusqlite::Result<Vec<String>>>()
            .db_context("Failed to read follow row")?;
        Ok(followees)
    }
}
