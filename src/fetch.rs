//! Document fetching.
//!
//! [`DocumentSource`] is the seam between the lookup client and the
//! network, so extraction can be driven by canned documents in tests.

use crate::error::{JarlError, Result};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://mvnrepository.com";

/// Retrieves a raw document for a path relative to some base location.
pub trait DocumentSource {
    /// `path` is fully formed, with its query already encoded.
    fn fetch(&self, path: &str) -> Result<String>;

    /// Absolute location of `path`, used in error messages.
    fn locate(&self, path: &str) -> String;
}

/// Fetches documents with a single blocking HTTP GET. No retries.
pub struct HttpFetcher {
    base_url: String,
    user_agent: String,
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new(base_url: &str, user_agent: &str, timeout: Option<Duration>) -> Self {
        let config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent: user_agent.to_string(),
            agent: ureq::Agent::new_with_config(config),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl DocumentSource for HttpFetcher {
    fn fetch(&self, path: &str) -> Result<String> {
        let url = self.locate(path);
        debug!(%url, "fetching document");

        let mut response = self
            .agent
            .get(&url)
            .header("User-Agent", &self.user_agent)
            .call()
            .map_err(|e| JarlError::Transport {
                url: url.clone(),
                source: Box::new(e),
            })?;

        // Bodies are always read to the end so the connection is released.
        let status = response.status().as_u16();
        if status != 200 {
            let _ = response.body_mut().read_to_vec();
            return Err(JarlError::UnexpectedStatus { url, status });
        }

        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| JarlError::Transport {
                url: url.clone(),
                source: Box::new(e),
            })?;

        debug!(%url, bytes = body.len(), "document received");
        Ok(body)
    }

    fn locate(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
