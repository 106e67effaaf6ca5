//! Legacy fixed-cardinality aggregation.
//!
//! ASSUMPTION: each account owns exactly `posts_per_account` posts, and
//! accounts appear in the same order as their posts' ids. Under that
//! assumption the commented posts, sorted by id, split into consecutive
//! chunks, one per account. Foreign keys are not consulted at all.
//!
//! Only correct when the assumption holds. Never the default strategy.

use crate::{
    model::Account,
    rank::{sort_ranked, RankedAccount},
    tally::CommentTally,
};

/// Score accounts by positional chunks of the tally.
///
/// Chunk `i` (sum of `posts_per_account` consecutive entries, divided by
/// `posts_per_account`) goes to `accounts[i]`. A trailing partial chunk
/// is discarded; accounts with no chunk are left unscored.
pub fn rank_by_chunks(
    accounts: &[Account],
    tally: &CommentTally,
    posts_per_account: usize,
    limit: usize,
) -> Vec<RankedAccount> {
    if posts_per_account == 0 {
        return Vec::new();
    }

    let counts: Vec<u64> = tally.iter().map(|(_, count)| count).collect();
    let averages: Vec<f64> = counts
        .chunks_exact(posts_per_account)
        .map(|chunk| chunk.iter().sum::<u64>() as f64 / posts_per_account as f64)
        .collect();

    if averages.len() != accounts.len() {
        log::warn!(
            "Chunked strategy: {} chunks of {posts_per_account} for {} accounts",
            averages.len(),
            accounts.len()
        );
    }

    let mut ranked: Vec<RankedAccount> = accounts
        .iter()
        .zip(averages)
        .map(|(account, score)| RankedAccount {
            id:    account.id,
            name:  account.name.clone(),
            score,
        })
        .collect();

    sort_ranked(&mut ranked);
    ranked.truncate(limit);
    ranked
}
