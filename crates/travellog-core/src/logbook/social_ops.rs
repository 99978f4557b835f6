//! Likes, comments and follows.

use std::collections::HashSet;

use super::Logbook;
use crate::{
    error::Result,
    models::{Comment, LikeStatus, Writer},
    params::{AddComment, Follow, Id},
};

impl Logbook {
    /// Likes the log for `email`, or takes the like back.
    pub async fn toggle_like(&self, params: &Id, email: &str) -> Result<LikeStatus> {
        let id = params.id;
        let email = email.to_string();
        self.with_database(move |db| db.toggle_like(id, &email)).await
    }

    pub async fn liked_log_ids(&self, email: &str) -> Result<HashSet<u64>> {
        let email = email.to_string();
        self.with_database(move |db| db.liked_log_ids(&email)).await
    }

    /// Posts a comment by `writer`.
    pub async fn add_comment(&self, writer: &Writer, params: &AddComment) -> Result<Comment> {
        let writer = writer.clone();
        let params = params.clone();
        self.with_database(move |db| db.add_comment(params.log_id, &writer, &params.content))
            .await
    }

    pub async fn list_comments(&self, params: &Id) -> Result<Vec<Comment>> {
        let id = params.id;
        self.with_database(move |db| db.get_comments(id)).await
    }

    /// Makes `follower` follow another user. Returns false if it already did.
    pub async fn follow(&self, follower: &str, params: &Follow) -> Result<bool> {
        let follower = follower.to_string();
        let followee = params.email.clone();
        self.with_database(move |db| db.follow(&follower, &followee))
            .await
    }

    pub async fn followees(&self, follower: &str) -> Result<Vec<String>> {
        let follower = follower.to_string();
        self.with_database(move |db| db.followees(&follower)).await
    }
}
