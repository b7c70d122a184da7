//! # jarl - Your trusty jar locator
//!
//! jarl finds dependency coordinates for JVM libraries by querying an
//! mvnrepository-style index, lets you pick an artifact and version, and
//! renders the pick as a declaration for your build tool.
//!
//! ## Quick Start
//!
//! ```bash
//! # Search, pick interactively, copy the declaration
//! jarl reactor-core
//!
//! # Straight to a Gradle declaration
//! jarl reactor-core --tool gradle
//! ```
//!
//! ## Module Organization
//!
//! - [`fetch`] - Single-shot HTTP document fetching
//! - [`extract`] - Search and artifact page extraction
//! - [`client`] - Lookups tying fetching and extraction together
//! - [`render`] - Build tool declarations
//! - [`prompt`] - Interactive menus

/// Best-effort clipboard copy.
pub mod clipboard;

/// Artifact lookups against the index.
pub mod client;

/// Configuration file (`~/.jarl.toml`) and environment overrides.
pub mod config;

/// Error taxonomy.
pub mod error;

/// Typed records extracted from index pages.
pub mod extract;

/// Document fetching over HTTP.
pub mod fetch;

/// Plain value types: artifacts, versions, repositories.
pub mod model;

/// Interactive selection menus.
pub mod prompt;

/// Build tool declaration templates.
pub mod render;

/// Terminal tables for the listing mode.
pub mod ui;

pub use error::{JarlError, Result};
