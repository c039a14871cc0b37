//! Headless replay of recorded input events
//!
//! Reads a JSON array of input events, feeds them through a fresh coordinator
//! and reports the final state snapshot.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

use crate::coordinator::UiCoordinator;
use crate::shared::{InputEvent, UiSnapshot};

/// Parse a JSON event script
pub fn parse_events(json: &str) -> Result<Vec<InputEvent>> {
    serde_json::from_str(json).context("Invalid event script")
}

/// Load a JSON event script from file
pub fn load_events(path: &Path) -> Result<Vec<InputEvent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read event script {:?}", path))?;
    parse_events(&content)
}

/// Dispatch every event in order. Returns the final snapshot.
pub fn replay(coordinator: &mut UiCoordinator, events: Vec<InputEvent>) -> UiSnapshot {
    let total = events.len();
    let mut emitted = 0;

    for event in events {
        let instructions = coordinator.handle(event);
        debug!("{} render instruction(s)", instructions.len());
        emitted += instructions.len();
    }

    info!(
        "Replayed {} event(s), {} render instruction(s)",
        total, emitted
    );
    coordinator.snapshot()
}

/// Replay a script file and return the snapshot as pretty JSON
pub fn replay_file(coordinator: &mut UiCoordinator, path: &Path) -> Result<String> {
    let events = load_events(path)?;
    let snapshot = replay(coordinator, events);
    Ok(snapshot.to_json()?)
}
