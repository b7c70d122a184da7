//! Settings from `~/.jarl.toml` and the environment.
//!
//! ```toml
//! base_url = "https://mvnrepository.com"
//! tool = "gradle"        # skip the style menu
//! copy = true            # copy the declaration to the clipboard
//! timeout_secs = 30      # unset: transport default
//! ```
//!
//! Command-line flags override the environment (`JARL_BASE_URL`,
//! `JARL_TOOL`), which overrides the file.

use crate::error::{JarlError, Result};
use crate::fetch::DEFAULT_BASE_URL;
use crate::render::BuildTool;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

const CONFIG_FILE: &str = ".jarl.toml";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct JarlConfig {
    pub base_url: String,
    pub tool: Option<BuildTool>,
    pub copy: bool,
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl Default for JarlConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            tool: None,
            copy: true,
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("jarl/{}", env!("CARGO_PKG_VERSION"))
}

impl JarlConfig {
    /// Loads `explicit` if given (it must exist), otherwise `~/.jarl.toml`
    /// if present, then applies environment overrides.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| JarlError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!(path = %path.display(), "using config file");
        Self::parse(&content).map_err(|reason| JarlError::Config {
            path: path.to_path_buf(),
            reason,
        })
    }

    fn parse(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.message().to_string())
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(url) = var("JARL_BASE_URL").filter(|v| !v.is_empty()) {
            self.base_url = url;
        }
        if let Some(name) = var("JARL_TOOL").filter(|v| !v.is_empty()) {
            self.tool = Some(BuildTool::from_name(&name).ok_or_else(|| JarlError::Config {
                path: PathBuf::from("$JARL_TOOL"),
                reason: format!("unknown build tool '{name}'"),
            })?);
        }
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

pub fn default_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE))
}
