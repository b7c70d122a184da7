//! Typed records produced by the extraction layer.
//!
//! Every record is a plain value. Composition is by copy: a [`Version`]
//! carries its own [`Repository`] rather than pointing into
//! [`Details::repositories`].

use serde::Serialize;

/// A library identified by its `(group, id)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub group: String,
    pub id: String,
    pub description: String,
}

impl Artifact {
    /// `group:id`, the way coordinates are usually written.
    pub fn coordinates(&self) -> String {
        format!("{}:{}", self.group, self.id)
    }
}

/// A hosting location such as "Central".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repository {
    pub name: String,
    pub url: String,
}

/// One published version of an artifact.
///
/// `value` is an opaque token. It is not assumed to be semver and is never
/// re-sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Version {
    pub value: String,
    pub repository: Repository,
    pub date: String,
}

/// Everything known about one artifact at fetch time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Details {
    pub license: String,
    pub repositories: Vec<Repository>,
    pub versions: Vec<Version>,
}

/// One page of search results.
///
/// `total` is the count claimed by the index and is independent of
/// `artifacts.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub total: usize,
    pub page: u32,
    pub artifacts: Vec<Artifact>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}
