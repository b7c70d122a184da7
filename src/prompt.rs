//! Interactive selection menus.
//!
//! Each menu returns exactly one choice or [`JarlError::Cancelled`] when the
//! operator backs out with Esc or Ctrl-C.

use crate::error::{JarlError, Result};
use crate::model::{Artifact, Details, Version};
use crate::render::BuildTool;
use inquire::{InquireError, Select};
use std::fmt;

const DESCRIPTION_WIDTH: usize = 60;
const PREVIEW_WIDTH: usize = 72;

struct ArtifactChoice(Artifact);

impl fmt::Display for ArtifactChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.coordinates())?;
        let description = single_line(&self.0.description);
        if !description.is_empty() {
            write!(
                f,
                "  {}",
                console::truncate_str(&description, DESCRIPTION_WIDTH, "...")
            )?;
        }
        Ok(())
    }
}

struct VersionChoice(Version);

impl fmt::Display for VersionChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  ({}, {})",
            self.0.value, self.0.repository.name, self.0.date
        )
    }
}

struct StyleChoice {
    tool: BuildTool,
    declaration: String,
}

impl fmt::Display for StyleChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let preview = single_line(&self.declaration);
        write!(
            f,
            "{:<10} {}",
            self.tool.name(),
            console::truncate_str(&preview, PREVIEW_WIDTH, "...")
        )
    }
}

fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn cancelled_or_failed(err: InquireError) -> JarlError {
    match err {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            JarlError::Cancelled
        }
        other => JarlError::Prompt(other.to_string()),
    }
}

/// Versions match when they start with the typed text.
fn version_scorer(input: &str, choice: &VersionChoice, _value: &str, index: usize) -> Option<i64> {
    choice
        .0
        .value
        .starts_with(input)
        .then(|| -i64::try_from(index).unwrap_or(i64::MAX))
}

pub fn select_artifact(artifacts: &[Artifact]) -> Result<Artifact> {
    let options = artifacts.iter().cloned().map(ArtifactChoice).collect();
    Select::new("Artifacts:", options)
        .with_page_size(5)
        .prompt()
        .map(|choice| choice.0)
        .map_err(cancelled_or_failed)
}

pub fn select_version(details: &Details) -> Result<Version> {
    let help = format!("License: {}  |  type to filter by version prefix", display_license(details));
    let options = details.versions.iter().cloned().map(VersionChoice).collect();
    Select::new("Versions:", options)
        .with_page_size(6)
        .with_help_message(&help)
        .with_scorer(&version_scorer)
        .prompt()
        .map(|choice| choice.0)
        .map_err(cancelled_or_failed)
}

/// Offers every rendered declaration and returns the chosen one.
pub fn select_declaration(rendered: Vec<(BuildTool, String)>) -> Result<String> {
    let options = rendered
        .into_iter()
        .map(|(tool, declaration)| StyleChoice { tool, declaration })
        .collect();
    Select::new("Style:", options)
        .with_page_size(7)
        .prompt()
        .map(|choice| choice.declaration)
        .map_err(cancelled_or_failed)
}

fn display_license(details: &Details) -> &str {
    if details.license.is_empty() {
        "unknown"
    } else {
        &details.license
    }
}
