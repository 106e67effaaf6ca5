//! CommentTally: comment count per post.
//!
//! Comments are grouped by post id only. Two comments sharing an id are
//! still counted twice. Posts without comments have no entry; callers
//! read absence as zero via `count_for`.

use crate::{model::Comment, types::PostId};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentTally {
    counts: BTreeMap<PostId, u64>,
}

impl CommentTally {
    pub fn from_comments(comments: &[Comment]) -> Self {
        let mut counts = BTreeMap::new();
        for comment in comments {
            *counts.entry(comment.post_id).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Comments on `post_id`; 0 when the post has none.
    pub fn count_for(&self, post_id: PostId) -> u64 {
        self.counts.get(&post_id).copied().unwrap_or(0)
    }

    pub fn contains(&self, post_id: PostId) -> bool {
        self.counts.contains_key(&post_id)
    }

    /// Number of distinct post ids that received at least one comment.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Entries in ascending post id order.
    pub fn iter(&self) -> impl Iterator<Item = (PostId, u64)> + '_ {
        self.counts.iter().map(|(&post_id, &count)| (post_id, count))
    }
}
