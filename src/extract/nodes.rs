//! Node paths into the index's markup.
//!
//! The index controls its own HTML, so every structural assumption lives
//! here behind one accessor per field. A markup change on the site should
//! only ever touch this file.

use crate::model::Repository;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

/// Placeholder for a repository link that carries no `href`.
pub const UNKNOWN_URL: &str = "#unknown";

fn selector(css: &'static str) -> Selector {
    // Literals only; `test_every_selector_parses` covers them.
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e}"))
}

// Search page
static TOTAL_RESULTS: LazyLock<Selector> = LazyLock::new(|| selector("#maincontent > h2 > b"));
static RESULT_ROW: LazyLock<Selector> = LazyLock::new(|| selector("#maincontent > div.im"));
static ROW_GROUP: LazyLock<Selector> =
    LazyLock::new(|| selector("div.im-header > p > a:nth-child(1)"));
static ROW_ID: LazyLock<Selector> =
    LazyLock::new(|| selector("div.im-header > p > a:nth-child(2)"));
static ROW_DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| selector("div.im-description"));

// Artifact page
static LICENSE: LazyLock<Selector> =
    LazyLock::new(|| selector("#maincontent > table > tbody > tr:nth-child(1) > td > span"));
static REPOSITORY_TAB: LazyLock<Selector> =
    LazyLock::new(|| selector("#snippets > ul.tabs > li > a"));
static VERSION_FAMILY: LazyLock<Selector> =
    LazyLock::new(|| selector("#snippets > div > div > div > table > tbody"));
static VERSION_LINK: LazyLock<Selector> = LazyLock::new(|| selector("a.vbtn"));
static VERSION_REPOSITORY: LazyLock<Selector> = LazyLock::new(|| selector("a.b.lic"));
static LAST_CELL: LazyLock<Selector> = LazyLock::new(|| selector("td:last-child"));

/// Concatenated text of every node matching `sel` under `scope`, trimmed.
fn text(scope: ElementRef<'_>, sel: &Selector) -> String {
    scope
        .select(sel)
        .flat_map(|e| e.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Name and `href` of a repository link, with the placeholder standing in
/// for a missing `href`.
fn repository(link: Option<ElementRef<'_>>) -> Repository {
    match link {
        Some(a) => Repository {
            name: a.text().collect::<String>().trim().to_string(),
            url: a.value().attr("href").unwrap_or(UNKNOWN_URL).to_string(),
        },
        None => Repository {
            name: String::new(),
            url: UNKNOWN_URL.to_string(),
        },
    }
}

pub fn total_marker(doc: &Html) -> String {
    text(doc.root_element(), &TOTAL_RESULTS)
}

pub fn result_rows(doc: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    doc.root_element().select(&RESULT_ROW)
}

pub fn row_group(row: ElementRef<'_>) -> String {
    text(row, &ROW_GROUP)
}

pub fn row_id(row: ElementRef<'_>) -> String {
    text(row, &ROW_ID)
}

pub fn row_description(row: ElementRef<'_>) -> String {
    text(row, &ROW_DESCRIPTION)
}

pub fn license(doc: &Html) -> String {
    text(doc.root_element(), &LICENSE)
}

pub fn repository_tabs(doc: &Html) -> impl Iterator<Item = Repository> + '_ {
    doc.root_element()
        .select(&REPOSITORY_TAB)
        .map(|a| repository(Some(a)))
}

/// One `tbody` per version line (3.2.x, 3.1.x, ...), in document order.
pub fn version_families(doc: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    doc.root_element().select(&VERSION_FAMILY)
}

pub fn family_rows(family: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    family.children().filter_map(ElementRef::wrap)
}

pub fn row_version(row: ElementRef<'_>) -> String {
    text(row, &VERSION_LINK)
}

pub fn row_repository(row: ElementRef<'_>) -> Repository {
    repository(row.select(&VERSION_REPOSITORY).next())
}

pub fn row_date(row: ElementRef<'_>) -> String {
    text(row, &LAST_CELL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_selector_parses() {
        for sel in [
            &TOTAL_RESULTS,
            &RESULT_ROW,
            &ROW_GROUP,
            &ROW_ID,
            &ROW_DESCRIPTION,
            &LICENSE,
            &REPOSITORY_TAB,
            &VERSION_FAMILY,
            &VERSION_LINK,
            &VERSION_REPOSITORY,
            &LAST_CELL,
        ] {
            LazyLock::force(sel);
        }
    }

    #[test]
    fn test_text_concatenates_and_trims() {
        let doc = Html::parse_document(
            r#"<div id="maincontent"><h2>Found <b> 1 </b><b>2 </b></h2></div>"#,
        );
        assert_eq!(total_marker(&doc), "1 2");
    }

    #[test]
    fn test_link_without_href_uses_placeholder() {
        let doc = Html::parse_document(
            r#"<div id="snippets"><ul class="tabs"><li><a>Central</a></li></ul></div>"#,
        );
        let repos: Vec<_> = repository_tabs(&doc).collect();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].name, "Central");
        assert_eq!(repos[0].url, UNKNOWN_URL);
    }

    #[test]
    fn test_missing_link_still_yields_placeholder() {
        let repo = repository(None);
        assert!(repo.name.is_empty());
        assert_eq!(repo.url, "#unknown");
    }
}
