//! ScoreRanker: average comments per post, sorted, truncated to the top N.
//!
//! ORDER: score descending, then account id ascending on equal scores.
//! The secondary key makes the report reproducible when scores tie,
//! which they do on the bundled snapshot (every account scores 5.0).

use crate::{
    join::AccountTotalsMap,
    model::Account,
    types::AccountId,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// Default report length.
pub const TOP_N: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAccount {
    pub id:    AccountId,
    pub name:  String,
    pub score: f64,
}

/// `<name> - <id>, Score: <score>`.
///
/// The score uses the round-trip float form, so whole numbers keep
/// their fractional part (`3.0`, not `3`).
impl fmt::Display for RankedAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}, Score: {:?}", self.name, self.id, self.score)
    }
}

/// Rank `accounts` by their totals and keep the first `limit`.
///
/// Accounts without totals, or with zero posts, have no score and are
/// left out. Fewer than `limit` scored accounts yields a shorter list.
pub fn rank_accounts(
    accounts: &[Account],
    totals: &AccountTotalsMap,
    limit: usize,
) -> Vec<RankedAccount> {
    let mut seen: BTreeSet<AccountId> = BTreeSet::new();
    let mut ranked: Vec<RankedAccount> = Vec::with_capacity(accounts.len());

    for account in accounts {
        if !seen.insert(account.id) {
            log::warn!("Duplicate account id {}; keeping the first record", account.id);
            continue;
        }
        let Some(score) = totals.get(&account.id).and_then(|t| t.score()) else {
            continue;
        };
        ranked.push(RankedAccount {
            id:    account.id,
            name:  account.name.clone(),
            score,
        });
    }

    let orphaned = totals.keys().filter(|id| !seen.contains(id)).count();
    if orphaned > 0 {
        log::debug!("{orphaned} post owners have no account record");
    }

    sort_ranked(&mut ranked);
    ranked.truncate(limit);
    ranked
}

/// Sort in report order.
pub fn sort_ranked(ranked: &mut [RankedAccount]) {
    ranked.sort_by(compare_ranked);
}

fn compare_ranked(a: &RankedAccount, b: &RankedAccount) -> Ordering {
    b.score.total_cmp(&a.score).then_with(|| a.id.cmp(&b.id))
}
