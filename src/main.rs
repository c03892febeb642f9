//! Entry point for the looping project gallery.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load user configuration from `conf/config.toml`.
//! - Load the project catalogue (a JSON file or the built-in placeholders).
//! - Launch the GUI application with the catalogue, config and bookmark.

mod app;
mod cache;
mod cancellation;
mod catalog;
mod config;
mod gallery;
mod image_url;
mod images;
mod theme;

use crate::app::run_app;
use crate::cache::{load_bookmark, load_source_config};
use crate::catalog::{CatalogSource, load_catalog};
use crate::config::load_config;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const USAGE: &str = "Usage: loop-gallery [catalogue.json] [--all]";

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let args = parse_args(env::args().skip(1))?;
    let mut config = load_config(Path::new("conf/config.toml"));
    if let Some(saved) = load_source_config(&args.source.cache_key()) {
        // Only the theme is changed from the UI; everything else follows the base file.
        info!(theme = %saved.theme, "Applying saved appearance for this catalogue");
        config.theme = saved.theme;
    }
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        source = %args.source,
        include_all = args.include_all,
        level = %config.log_level,
        "Starting gallery"
    );

    let projects = load_catalog(&args.source, args.include_all)?;
    if projects.is_empty() {
        warn!(source = %args.source, "Catalogue has no projects to show");
    }
    let bookmark = load_bookmark(&args.source.cache_key());
    if let Some(id) = &bookmark {
        info!(%id, resume = config.resume_last_project, "Found bookmarked project");
    }

    run_app(projects, args.source, config, bookmark).context("Failed to start the GUI")?;
    Ok(())
}

#[derive(Debug, PartialEq)]
struct Args {
    source: CatalogSource,
    include_all: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut path: Option<PathBuf> = None;
    let mut include_all = false;
    for arg in args {
        match arg.as_str() {
            "--all" => include_all = true,
            "-h" | "--help" => return Err(anyhow!(USAGE)),
            flag if flag.starts_with("--") => {
                return Err(anyhow!("Unknown option {flag}\n{USAGE}"));
            }
            _ if path.is_some() => return Err(anyhow!("Too many arguments\n{USAGE}")),
            other => path = Some(PathBuf::from(other)),
        }
    }

    let source = match path {
        Some(path) if !path.exists() => {
            return Err(anyhow!("File not found: {}", path.display()));
        }
        Some(path) => CatalogSource::File(path),
        None => CatalogSource::Placeholder,
    };
    Ok(Args {
        source,
        include_all,
    })
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn no_arguments_use_placeholder_catalogue() {
        let parsed = args(&[]).unwrap();
        assert_eq!(parsed.source, CatalogSource::Placeholder);
        assert!(!parsed.include_all);
    }

    #[test]
    fn all_flag_is_accepted_alone() {
        assert!(args(&["--all"]).unwrap().include_all);
    }

    #[test]
    fn existing_path_becomes_file_source() {
        let parsed = args(&["Cargo.toml", "--all"]).unwrap();
        assert_eq!(parsed.source, CatalogSource::File(PathBuf::from("Cargo.toml")));
        assert!(parsed.include_all);
    }

    #[test]
    fn rejects_missing_file_and_unknown_flags() {
        assert!(args(&["definitely-missing-catalogue.json"]).is_err());
        assert!(args(&["--bogus"]).is_err());
        assert!(args(&["Cargo.toml", "Cargo.toml"]).is_err());
    }
}
