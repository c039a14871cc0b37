//! StoryReview Studio - UI state coordinator for the story review mockup
//!
//! Tracks the active view, single-selection groups, the evidence drawer and
//! collapsible question cards, and drives an egui shell from that state.

mod config;
mod coordinator;
mod dashboard;
mod replay;
mod shared;
mod shortcuts;
mod storage;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::AppConfig;
use crate::coordinator::UiCoordinator;

/// StoryReview Studio - review stories across seed, draft, shape and test modes
#[derive(Parser, Debug)]
#[command(name = "storyreview-studio")]
#[command(about = "UI state coordinator and desktop shell for reviewing stories")]
struct Args {
    /// Config file (defaults to config.toml in the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// View to show at start-up
    #[arg(long)]
    view: Option<String>,

    /// List registered views and exit
    #[arg(long)]
    list_views: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Write the effective configuration to the config path and exit
    #[arg(long)]
    save_config: bool,

    /// Replay a JSON list of input events headlessly and print the final state
    #[arg(long, value_name = "EVENTS_JSON")]
    replay: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (overrides the config file)
    #[arg(long)]
    log_level: Option<String>,
}

/// Where the configuration came from
enum ConfigSource {
    File(PathBuf),
    Defaults,
    Fallback(PathBuf, anyhow::Error),
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (mut config, source) = load_or_create_config(args.config.as_deref());

    // Initialize logging on stderr so replay and print output stay clean
    let level = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match source {
        ConfigSource::File(path) => info!("Loaded configuration from {:?}", path),
        ConfigSource::Defaults => info!("Using default configuration"),
        ConfigSource::Fallback(path, e) => {
            warn!("Ignoring configuration at {:?}: {:#}", path, e);
            info!("Using default configuration");
        }
    }

    if let Some(view) = args.view {
        config.layout.start_view = Some(view);
    }
    config.validate()?;

    if args.print_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    if args.save_config {
        let path = match args.config {
            Some(path) => path,
            None => storage::default_config_path()?,
        };
        config::save_config(&config, &path)
            .with_context(|| format!("Failed to write configuration to {:?}", path))?;
        info!("Saved configuration to {:?}", path);
        return Ok(());
    }

    let mut coordinator = UiCoordinator::new(&config.layout, config.shortcuts.clone())
        .context("Failed to build the UI coordinator")?;

    if args.list_views {
        println!("Registered views:");
        for view in coordinator.views() {
            let mut tags = Vec::new();
            if view == coordinator.active_view() {
                tags.push("start");
            }
            if view == coordinator.dashboard_view() {
                tags.push("search shortcut");
            }
            if view == coordinator.story_view() {
                tags.push("story rows");
            }
            if tags.is_empty() {
                println!("  {}", view);
            } else {
                println!("  {} ({})", view, tags.join(", "));
            }
        }
        return Ok(());
    }

    if let Some(path) = args.replay {
        let snapshot = replay::replay_file(&mut coordinator, &path)?;
        println!("{}", snapshot);
        return Ok(());
    }

    info!("StoryReview Studio loaded");
    info!("Start view: {}", coordinator.active_view());

    if let Err(e) = dashboard::run_dashboard(coordinator, config.window) {
        tracing::error!("Studio window error: {}", e);
    }

    info!("StoryReview Studio shutdown complete");

    Ok(())
}

/// Load configuration from file or fall back to defaults
fn load_or_create_config(explicit: Option<&Path>) -> (AppConfig, ConfigSource) {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match storage::default_config_path() {
            Ok(path) if path.exists() => path,
            _ => return (AppConfig::default(), ConfigSource::Defaults),
        },
    };

    match config::load_config(&path) {
        Ok(config) => (config, ConfigSource::File(path)),
        Err(e) => (AppConfig::default(), ConfigSource::Fallback(path, e)),
    }
}
