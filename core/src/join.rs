//! PostJoin: fold per-post comment counts into per-account totals.
//!
//! Posts are accumulated under their owner id whether or not an account
//! with that id exists. Unknown owners drop out later, when the ranker
//! joins against the account list.

use crate::{
    model::Post,
    tally::CommentTally,
    types::{AccountId, PostId},
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTotals {
    pub total_posts:    u64,
    pub total_comments: u64,
}

impl AccountTotals {
    /// Average comments per post. `None` when the account owns no posts.
    pub fn score(&self) -> Option<f64> {
        if self.total_posts == 0 {
            return None;
        }
        Some(self.total_comments as f64 / self.total_posts as f64)
    }
}

pub type AccountTotalsMap = BTreeMap<AccountId, AccountTotals>;

/// Data-quality findings from the join. Informational only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinDiagnostics {
    /// Comments whose post id matched no post.
    pub dangling_comments:  u64,
    /// The post ids those comments pointed at, ascending.
    pub unmatched_post_ids: Vec<PostId>,
}

/// Attach each post's comment count to its owning account.
pub fn join_posts(posts: &[Post], tally: &CommentTally) -> (AccountTotalsMap, JoinDiagnostics) {
    let mut totals = AccountTotalsMap::new();
    let mut seen_posts = BTreeSet::new();

    for post in posts {
        let entry = totals.entry(post.owner_account_id).or_default();
        entry.total_posts += 1;
        entry.total_comments += tally.count_for(post.id);
        seen_posts.insert(post.id);
    }

    let mut diagnostics = JoinDiagnostics::default();
    for (post_id, count) in tally.iter() {
        if !seen_posts.contains(&post_id) {
            diagnostics.dangling_comments += count;
            diagnostics.unmatched_post_ids.push(post_id);
        }
    }

    if diagnostics.dangling_comments > 0 {
        log::debug!(
            "Dropped {} comments referencing unknown posts {:?}",
            diagnostics.dangling_comments,
            diagnostics.unmatched_post_ids
        );
    }
    log::debug!("Joined {} posts into {} account totals", posts.len(), totals.len());

    (totals, diagnostics)
}
