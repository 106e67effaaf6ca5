//! The engagement pipeline.
//!
//! EXECUTION ORDER (fixed, never reordered):
//!   1. CommentTally   comments → per-post counts
//!   2. PostJoin       posts + tally → per-account totals
//!   3. ScoreRanker    accounts + totals → top N
//!
//! The chunked strategy replaces steps 2 and 3 with `rank_by_chunks`.
//!
//! RULES:
//!   - Data flows one way. No stage reads a later stage's output.
//!   - Data-quality problems are dropped and logged, never raised.

use crate::{
    chunked::rank_by_chunks,
    config::{AggregationStrategy, RankConfig},
    error::RankResult,
    ingest::Dataset,
    join::{join_posts, AccountTotalsMap, JoinDiagnostics},
    rank::{rank_accounts, RankedAccount},
    tally::CommentTally,
};
use serde::Serialize;

/// Everything one run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementReport {
    pub strategy:    AggregationStrategy,
    /// Empty under the chunked strategy.
    pub totals:      AccountTotalsMap,
    pub diagnostics: JoinDiagnostics,
    pub ranked:      Vec<RankedAccount>,
}

impl EngagementReport {
    /// One formatted line per ranked account, in rank order.
    pub fn lines(&self) -> Vec<String> {
        self.ranked.iter().map(ToString::to_string).collect()
    }
}

pub struct EngagementPipeline {
    config: RankConfig,
}

impl EngagementPipeline {
    pub fn new(config: RankConfig) -> RankResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    pub fn run(&self, dataset: &Dataset) -> RankResult<EngagementReport> {
        let tally = CommentTally::from_comments(&dataset.comments);
        log::debug!(
            "Tallied {} comments across {} posts",
            tally.total(),
            tally.len()
        );

        let report = match self.config.strategy {
            AggregationStrategy::Join => {
                let (totals, diagnostics) = join_posts(&dataset.posts, &tally);
                let ranked = rank_accounts(&dataset.accounts, &totals, self.config.top_n);
                EngagementReport {
                    strategy: AggregationStrategy::Join,
                    totals,
                    diagnostics,
                    ranked,
                }
            }
            AggregationStrategy::Chunked => EngagementReport {
                strategy:    AggregationStrategy::Chunked,
                totals:      AccountTotalsMap::new(),
                diagnostics: JoinDiagnostics::default(),
                ranked:      rank_by_chunks(
                    &dataset.accounts,
                    &tally,
                    self.config.posts_per_account,
                    self.config.top_n,
                ),
            },
        };

        log::info!(
            "Ranked {} accounts ({} strategy)",
            report.ranked.len(),
            report.strategy.as_str()
        );
        Ok(report)
    }
}
