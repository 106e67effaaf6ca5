//! Input records, decoded from the three platform endpoints.
//!
//! Records are read-only snapshots: built once at ingestion and never
//! mutated afterwards. Extra fields the endpoints carry (title, body,
//! email, ...) are ignored on decode.

use crate::types::{AccountId, CommentId, PostId};
use serde::{Deserialize, Serialize};

/// A blogger on the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id:       AccountId,
    pub name:     String,
    /// Carried through ingestion, unused by scoring.
    pub username: String,
}

/// A blog post, owned by exactly one account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    #[serde(rename = "userId")]
    pub owner_account_id: AccountId,
}

/// A comment, attached to exactly one post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    #[serde(rename = "postId")]
    pub post_id: PostId,
}

impl Account {
    pub fn new(id: AccountId, name: impl Into<String>, username: impl Into<String>) -> Self {
        Self { id, name: name.into(), username: username.into() }
    }
}

impl Post {
    pub fn new(id: PostId, owner_account_id: AccountId) -> Self {
        Self { id, owner_account_id }
    }
}

impl Comment {
    pub fn new(id: CommentId, post_id: PostId) -> Self {
        Self { id, post_id }
    }
}
