//! Content providers: resolve a logical resource name to raw bytes.
//!
//! RULE: Nothing past ingestion touches the filesystem.
//! The pipeline only ever sees a `ContentProvider`.

use crate::error::{RankError, RankResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// The three datasets the platform serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Users,
    Posts,
    Comments,
}

impl Resource {
    pub const ALL: [Resource; 3] = [Resource::Users, Resource::Posts, Resource::Comments];

    /// Stable logical name. Never renamed once published.
    pub fn name(self) -> &'static str {
        match self {
            Resource::Users    => "users",
            Resource::Posts    => "posts",
            Resource::Comments => "comments",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.json", self.name())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Capability to fetch the content of a resource.
pub trait ContentProvider {
    fn fetch(&self, resource: Resource) -> RankResult<Vec<u8>>;
}

/// Serves `<data_dir>/<name>.json`.
#[derive(Debug, Clone)]
pub struct DirProvider {
    data_dir: PathBuf,
}

impl DirProvider {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into() }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_for(&self, resource: Resource) -> PathBuf {
        self.data_dir.join(resource.file_name())
    }
}

impl ContentProvider for DirProvider {
    fn fetch(&self, resource: Resource) -> RankResult<Vec<u8>> {
        let path = self.path_for(resource);
        log::debug!("Reading {resource} from {}", path.display());
        std::fs::read(&path).map_err(|source| RankError::ResourceUnavailable {
            resource,
            path: path.display().to_string(),
            source,
        })
    }
}

/// Holds resource bytes in memory. Used by tests and embedders.
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    entries: HashMap<Resource, Vec<u8>>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, resource: Resource, content: impl Into<Vec<u8>>) -> Self {
        self.insert(resource, content);
        self
    }

    pub fn insert(&mut self, resource: Resource, content: impl Into<Vec<u8>>) {
        self.entries.insert(resource, content.into());
    }
}

impl ContentProvider for MemoryProvider {
    fn fetch(&self, resource: Resource) -> RankResult<Vec<u8>> {
        self.entries
            .get(&resource)
            .cloned()
            .ok_or(RankError::ResourceMissing { resource })
    }
}
