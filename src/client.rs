//! Artifact lookups against an mvnrepository-style index.

use crate::error::{JarlError, Result};
use crate::extract;
use crate::fetch::DocumentSource;
use crate::model::{Details, SearchResults};
use tracing::info;

/// Queries artifacts through any [`DocumentSource`].
pub struct Mvnrepository<S> {
    source: S,
}

impl<S: DocumentSource> Mvnrepository<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Searches for artifacts matching `query`, sorted by relevance.
    pub fn search_artifacts(&self, query: &str, page: u32) -> Result<SearchResults> {
        let path = search_path(query, page);
        info!(query, page, "searching artifacts");
        let raw = self.source.fetch(&path)?;
        extract::parse_search(&raw, page)
    }

    /// Fetches license, repositories and versions of `group:id`.
    pub fn artifact_details(&self, group: &str, id: &str) -> Result<Details> {
        let path = artifact_path(group, id);
        info!(group, id, "fetching artifact details");
        let raw = self.source.fetch(&path).map_err(|e| match e {
            JarlError::UnexpectedStatus { status, .. } => JarlError::ArtifactNotFound {
                group: group.to_string(),
                id: id.to_string(),
                status,
            },
            other => other,
        })?;
        extract::parse_details(&raw)
    }
}

pub fn search_path(query: &str, page: u32) -> String {
    format!(
        "/search?q={}&p={}&sort=relevance",
        urlencoding::encode(query),
        page
    )
}

pub fn artifact_path(group: &str, id: &str) -> String {
    format!(
        "/artifact/{}/{}",
        urlencoding::encode(group),
        urlencoding::encode(id)
    )
}
