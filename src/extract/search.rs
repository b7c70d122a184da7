use super::{document, nodes};
use crate::error::{JarlError, Result};
use crate::model::{Artifact, SearchResults};
use tracing::debug;

/// Parses a search page.
///
/// The total count is mandatory. Rows without a group are sponsored
/// content and are skipped. `page` is echoed back as requested, since the
/// page itself does not say which page was served.
pub fn parse_search(raw: &str, page: u32) -> Result<SearchResults> {
    let doc = document(raw)?;
    let total = parse_total(&nodes::total_marker(&doc))?;

    let mut artifacts = Vec::new();
    let mut skipped = 0usize;
    for row in nodes::result_rows(&doc) {
        let group = nodes::row_group(row);
        if group.is_empty() {
            skipped += 1;
            continue;
        }
        artifacts.push(Artifact {
            group,
            id: nodes::row_id(row),
            description: nodes::row_description(row),
        });
    }

    debug!(total, page, rows = artifacts.len(), skipped, "parsed search page");
    Ok(SearchResults {
        total,
        page,
        artifacts,
    })
}

fn parse_total(marker: &str) -> Result<usize> {
    let digits: String = marker.chars().filter(|c| *c != ',').collect();
    digits.parse().map_err(|_| JarlError::MissingTotal {
        found: marker.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(group: &str, id: &str, description: &str) -> String {
        format!(
            r#"<div class="im">
                <div class="im-header"><p><a href="/artifact/{group}">{group}</a><a href="/artifact/{group}/{id}">{id}</a></p></div>
                <div class="im-description">{description}</div>
            </div>"#
        )
    }

    fn page(total: &str, rows: &[String]) -> String {
        format!(
            r#"<html><body><div id="maincontent"><h2>Found <b>{total}</b> results</h2>{}</div></body></html>"#,
            rows.concat()
        )
    }

    #[test]
    fn test_rows_come_back_in_document_order() {
        let raw = page(
            "120",
            &[
                row("io.projectreactor", "reactor-core", "Non-Blocking Reactive Foundation"),
                row("io.projectreactor", "reactor-test", "Test support"),
            ],
        );
        let results = parse_search(&raw, 1).unwrap();
        assert_eq!(results.total, 120);
        assert_eq!(results.page, 1);
        let ids: Vec<_> = results.artifacts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["reactor-core", "reactor-test"]);
        assert_eq!(
            results.artifacts[0].description,
            "Non-Blocking Reactive Foundation"
        );
    }

    #[test]
    fn test_ad_rows_are_skipped() {
        let ad = r#"<div class="im"><div class="im-header"><p></p></div><div class="im-description">Sponsored</div></div>"#;
        let raw = page(
            "3",
            &[
                row("a", "one", ""),
                ad.to_string(),
                row("b", "two", ""),
                ad.to_string(),
            ],
        );
        let results = parse_search(&raw, 1).unwrap();
        assert_eq!(results.artifacts.len(), 2);
        assert!(results.artifacts.iter().all(|a| !a.group.is_empty()));
    }

    #[test]
    fn test_zero_rows_is_valid() {
        let results = parse_search(&page("0", &[]), 1).unwrap();
        assert_eq!(results.total, 0);
        assert!(results.is_empty());
    }

    #[test]
    fn test_total_is_independent_of_row_count() {
        let raw = page("1,234", &[row("a", "b", "")]);
        let results = parse_search(&raw, 7).unwrap();
        assert_eq!(results.total, 1234);
        assert_eq!(results.page, 7);
        assert_eq!(results.artifacts.len(), 1);
    }

    #[test]
    fn test_missing_total_fails() {
        let raw = r#"<html><body><div id="maincontent"></div></body></html>"#;
        assert!(matches!(
            parse_search(raw, 1),
            Err(JarlError::MissingTotal { .. })
        ));
    }

    #[test]
    fn test_non_numeric_total_fails() {
        let err = parse_search(&page("many", &[]), 1).unwrap_err();
        match err {
            JarlError::MissingTotal { found } => assert_eq!(found, "many"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
