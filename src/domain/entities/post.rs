use crate::domain::value_objects::{PrincipalId, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub content: String,
    pub author: PrincipalId,
    pub timestamp: Timestamp,
}

impl Reply {
    pub fn new(content: String, author: PrincipalId, timestamp: Timestamp) -> Self {
        Self {
            content,
            author,
            timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub content: String,
    pub author: PrincipalId,
    pub timestamp: Timestamp,
    pub replies: Vec<Reply>,
}

impl Post {
    pub fn new(id: u64, content: String, author: PrincipalId, timestamp: Timestamp) -> Self {
        Self {
            id,
            content,
            author,
            timestamp,
            replies: Vec::new(),
        }
    }

    pub fn with_replies(mut self, replies: Vec<Reply>) -> Self {
        self.replies = replies;
        self
    }

    /// Replies only ever grow.
    pub fn add_reply(&mut self, reply: Reply) {
        self.replies.push(reply);
    }

    pub fn reply_count(&self) -> usize {
        self.replies.len()
    }

    pub fn is_authored_by(&self, principal: &PrincipalId) -> bool {
        &self.author == principal
    }
}

/// Sorts newest first. Equal timestamps keep no particular order.
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_unstable_by(|a, b| b.timestamp.cmp(&a.timestamp));
}
