use super::Validate;
use crate::domain::entities::{Post, Reply};
use crate::shared::format::{relative_time, reply_count_label};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ReplyResponse {
    pub content: String,
    pub author: String,
    pub created_at: u64,
    pub relative_time: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PostResponse {
    pub id: u64,
    pub content: String,
    pub author: String,
    pub created_at: u64,
    pub relative_time: String,
    pub reply_count: usize,
    pub reply_count_label: String,
    pub replies: Vec<ReplyResponse>,
}

impl ReplyResponse {
    pub fn from_reply(reply: Reply, now: DateTime<Utc>) -> Self {
        Self {
            relative_time: relative_time(reply.timestamp, now),
            created_at: reply.timestamp.as_nanos(),
            author: reply.author.to_string(),
            content: reply.content,
        }
    }
}

impl PostResponse {
    pub fn from_post(post: Post, now: DateTime<Utc>) -> Self {
        let reply_count = post.reply_count();
        Self {
            id: post.id,
            relative_time: relative_time(post.timestamp, now),
            created_at: post.timestamp.as_nanos(),
            author: post.author.to_string(),
            content: post.content,
            reply_count,
            reply_count_label: reply_count_label(reply_count),
            replies: post
                .replies
                .into_iter()
                .map(|reply| ReplyResponse::from_reply(reply, now))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub content: String,
}

impl Validate for CreatePostRequest {
    fn validate(&self) -> Result<(), String> {
        if self.content.trim().is_empty() {
            return Err("Content cannot be empty".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddReplyRequest {
    pub post_id: u64,
    pub content: String,
}

impl Validate for AddReplyRequest {
    fn validate(&self) -> Result<(), String> {
        if self.content.trim().is_empty() {
            return Err("Reply cannot be empty".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GetPostsRequest {
    /// Textual principal; all posts when absent.
    pub author: Option<String>,
}
