//! Ingestion: fetch the three resources and decode them into typed records.
//!
//! Any failure here is fatal. The pipeline never runs on a partial snapshot.

use crate::{
    error::{RankError, RankResult},
    model::{Account, Comment, Post},
    resource::{ContentProvider, Resource},
};
use serde::de::DeserializeOwned;

/// One complete, immutable snapshot of the platform.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub accounts: Vec<Account>,
    pub posts:    Vec<Post>,
    pub comments: Vec<Comment>,
}

impl Dataset {
    pub fn from_parts(accounts: Vec<Account>, posts: Vec<Post>, comments: Vec<Comment>) -> Self {
        Self { accounts, posts, comments }
    }

    /// Fetch and decode users, posts and comments from `provider`.
    pub fn load(provider: &dyn ContentProvider) -> RankResult<Self> {
        let accounts: Vec<Account> = decode(provider, Resource::Users)?;
        let posts: Vec<Post> = decode(provider, Resource::Posts)?;
        let comments: Vec<Comment> = decode(provider, Resource::Comments)?;
        Ok(Self { accounts, posts, comments })
    }
}

/// Decode one resource as a JSON array of `T`.
pub fn decode<T: DeserializeOwned>(
    provider: &dyn ContentProvider,
    resource: Resource,
) -> RankResult<Vec<T>> {
    let bytes = provider.fetch(resource)?;
    let records: Vec<T> = serde_json::from_slice(&bytes)
        .map_err(|source| RankError::Decode { resource, source })?;
    log::debug!("Decoded {} {resource} records", records.len());
    Ok(records)
}
