use crate::{
    error::{RankError, RankResult},
    rank::TOP_N,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// How per-account scores are derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationStrategy {
    /// comments → posts → accounts through their foreign keys.
    #[default]
    Join,
    /// Positional chunks of the tally. See `chunked`.
    Chunked,
}

impl AggregationStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            AggregationStrategy::Join    => "join",
            AggregationStrategy::Chunked => "chunked",
        }
    }
}

impl FromStr for AggregationStrategy {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "join"    => Ok(AggregationStrategy::Join),
            "chunked" => Ok(AggregationStrategy::Chunked),
            other => Err(RankError::InvalidConfig {
                reason: format!("unknown strategy '{other}' (expected join|chunked)"),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    /// Report length.
    pub top_n:             usize,
    pub strategy:          AggregationStrategy,
    /// Chunk size for the chunked strategy only.
    pub posts_per_account: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            top_n:             TOP_N,
            strategy:          AggregationStrategy::Join,
            posts_per_account: 10,
        }
    }
}

impl RankConfig {
    /// Load from a JSON file. Missing keys take their defaults.
    pub fn load(path: impl AsRef<Path>) -> RankResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?;
        let config: RankConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> RankResult<()> {
        if self.posts_per_account == 0 {
            return Err(RankError::InvalidConfig {
                reason: "posts_per_account must be > 0".into(),
            });
        }
        Ok(())
    }
}
