use crate::resource::Resource;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankError {
    #[error("Resource '{resource}' unavailable at {path}: {source}")]
    ResourceUnavailable {
        resource: Resource,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Resource '{resource}' not provided")]
    ResourceMissing { resource: Resource },

    #[error("Cannot decode '{resource}': {source}")]
    Decode {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type RankResult<T> = Result<T, RankError>;
