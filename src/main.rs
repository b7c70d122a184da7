//! # jarl CLI Entry Point
//!
//! Parses arguments with clap and walks the lookup flow:
//! search, pick an artifact, pick a version, pick a build tool, print and
//! copy the declaration.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use jarl::client::Mvnrepository;
use jarl::clipboard;
use jarl::config::JarlConfig;
use jarl::fetch::HttpFetcher;
use jarl::model::{Artifact, Details};
use jarl::prompt;
use jarl::render::{self, BuildTool};
use jarl::ui;
use jarl::JarlError;

#[derive(Parser)]
#[command(name = "jarl")]
#[command(about = "Your trusty 'Jar l'ocator", version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = "jarl helps you find jar coordinates right from your terminal.

Example:
$ jarl reactor-core

The resulting declaration is copied to the clipboard.")]
#[command(args_conflicts_with_subcommands = true)]
#[command(subcommand_negates_reqs = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Search term, e.g. reactor-core
    #[arg(required_unless_present = "artifact")]
    query: Option<String>,

    /// Results page to fetch
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    page: u32,

    /// Render for this build tool instead of asking
    #[arg(short, long, value_enum)]
    tool: Option<BuildTool>,

    /// Skip the search and go straight to an artifact
    #[arg(long, value_name = "GROUP:ID", value_parser = parse_coordinates, conflicts_with = "query")]
    artifact: Option<Coordinates>,

    /// Print results as a table instead of prompting
    #[arg(long)]
    list: bool,

    /// With --list, print JSON instead of a table
    #[arg(long, requires = "list")]
    json: bool,

    /// Base URL of the artifact index
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Config file (default is $HOME/.jarl.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Do not copy the declaration to the clipboard
    #[arg(long)]
    no_copy: bool,

    /// Show debug logs on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completion scripts
    Completion { shell: Shell },
}

#[derive(Clone, Debug)]
struct Coordinates {
    group: String,
    id: String,
}

fn parse_coordinates(s: &str) -> std::result::Result<Coordinates, String> {
    match s.split_once(':') {
        Some((group, id)) if !group.is_empty() && !id.is_empty() && !id.contains(':') => {
            Ok(Coordinates {
                group: group.to_string(),
                id: id.to_string(),
            })
        }
        _ => Err(format!("expected GROUP:ID, got '{s}'")),
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "jarl=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(Commands::Completion { shell }) = cli.command {
        generate(shell, &mut Cli::command(), "jarl", &mut std::io::stdout());
        return Ok(());
    }

    match run(&cli) {
        Err(e) if e.downcast_ref::<JarlError>().is_some_and(JarlError::is_cancelled) => {
            println!("{}", "Cancelled".red());
            Ok(())
        }
        other => other,
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = JarlConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(url) = &cli.base_url {
        config.base_url = url.clone();
    }
    let tool = cli.tool.or(config.tool);

    let fetcher = HttpFetcher::new(&config.base_url, &config.user_agent, config.timeout());
    let repo = Mvnrepository::new(fetcher);

    let artifact = match (&cli.artifact, &cli.query) {
        (Some(coords), _) => Artifact {
            group: coords.group.clone(),
            id: coords.id.clone(),
            description: String::new(),
        },
        (None, Some(query)) => match search(&repo, query, cli)? {
            Some(artifact) => artifact,
            None => return Ok(()),
        },
        (None, None) => anyhow::bail!("requires a search term"),
    };

    let details = repo.artifact_details(&artifact.group, &artifact.id)?;
    if cli.list {
        print_details(&details, cli.json)?;
        return Ok(());
    }
    if details.versions.is_empty() {
        println!(
            "{} No versions listed for {}",
            "x".red(),
            artifact.coordinates()
        );
        return Ok(());
    }
    let version = prompt::select_version(&details)?;

    let declaration = match tool {
        Some(tool) => tool.render(&artifact, &version),
        None => prompt::select_declaration(render::render_all(&artifact, &version))?,
    };

    println!();
    println!("{}", declaration.magenta());
    println!();

    if config.copy && !cli.no_copy && clipboard::copy(&declaration) {
        println!("{} Copied to clipboard", "✓".green());
    }
    Ok(())
}

/// Runs the search and lets the operator pick. `None` means there is
/// nothing further to do: no results, or the results were only listed.
fn search(
    repo: &Mvnrepository<HttpFetcher>,
    query: &str,
    cli: &Cli,
) -> Result<Option<Artifact>> {
    if !cli.json {
        print!("🔎 Searching for ");
        println!("{}", format!("'{}'", query).cyan());
    }

    let results = repo.search_artifacts(query, cli.page)?;

    if cli.list {
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&results)?);
        } else {
            ui::print_search_results(&results);
        }
        return Ok(None);
    }

    if results.is_empty() {
        println!("{}", "No results found".red());
        return Ok(None);
    }
    Ok(Some(prompt::select_artifact(&results.artifacts)?))
}

fn print_details(details: &Details, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(details)?);
    } else {
        let license = if details.license.is_empty() {
            "unknown"
        } else {
            &details.license
        };
        ui::print_versions(license, &details.versions);
    }
    Ok(())
}
