//! Extraction of typed records from the index's HTML pages.
//!
//! - [`parse_search`] - search page into [`SearchResults`](crate::model::SearchResults)
//! - [`parse_details`] - artifact page into [`Details`](crate::model::Details)
//!
//! Both either return a complete record or fail outright. Absent cosmetic
//! fields come back as empty strings or as [`UNKNOWN_URL`].

mod detail;
mod nodes;
mod search;

pub use detail::parse_details;
pub use nodes::UNKNOWN_URL;
pub use search::parse_search;

use crate::error::{JarlError, Result};
use scraper::Html;

/// Builds the node tree. The HTML5 parser recovers from any markup, so the
/// only document it cannot build a tree from is an empty one.
fn document(raw: &str) -> Result<Html> {
    if raw.trim().is_empty() {
        return Err(JarlError::MalformedDocument("empty document".to_string()));
    }
    Ok(Html::parse_document(raw))
}
