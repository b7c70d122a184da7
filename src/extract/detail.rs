use super::{document, nodes};
use crate::error::Result;
use crate::model::{Details, Version};
use tracing::debug;

/// Parses an artifact page.
///
/// License, repositories and versions are read independently. A missing
/// section yields an empty value rather than an error. Version families
/// are flattened in document order, and a row without a version link is
/// kept with an empty value.
pub fn parse_details(raw: &str) -> Result<Details> {
    let doc = document(raw)?;

    let license = nodes::license(&doc);
    let repositories: Vec<_> = nodes::repository_tabs(&doc).collect();

    let versions: Vec<Version> = nodes::version_families(&doc)
        .flat_map(nodes::family_rows)
        .map(|row| Version {
            value: nodes::row_version(row),
            repository: nodes::row_repository(row),
            date: nodes::row_date(row),
        })
        .collect();

    debug!(
        license = %license,
        repositories = repositories.len(),
        versions = versions.len(),
        "parsed artifact page"
    );
    Ok(Details {
        license,
        repositories,
        versions,
    })
}
