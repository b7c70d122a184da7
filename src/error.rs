//! Error taxonomy for lookups.
//!
//! Network failures and untrustworthy documents are fatal for the current
//! lookup. Missing cosmetic fields never show up here: the extractors fill
//! them with an empty string or a placeholder instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JarlError {
    #[error("expected 200 OK from {url}, but got {status}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("the artifact '{group}:{id}' was not found (status {status})")]
    ArtifactNotFound {
        group: String,
        id: String,
        status: u16,
    },

    #[error("could not parse response from server: {0}")]
    MalformedDocument(String),

    #[error("could not parse the total number of results (found {found:?})")]
    MissingTotal { found: String },

    #[error("cancelled")]
    Cancelled,

    #[error("prompt failed: {0}")]
    Prompt(String),

    #[error("invalid config file {path}: {reason}")]
    Config { path: PathBuf, reason: String },
}

impl JarlError {
    /// Non-200 status or transport failure.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedStatus { .. } | Self::Transport { .. } | Self::ArtifactNotFound { .. }
        )
    }

    /// The operator backed out of a selection. Not a failure of the lookup.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

pub type Result<T> = std::result::Result<T, JarlError>;
