use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::Path;

use crate::domain::models::Player;

/// Load a roster from a JSON file.
///
/// The file is a JSON array of players. Skill range and positions are taken
/// as supplied; the roster store owns that contract.
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Vec<Player>> {
    let path = path.as_ref();

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file: {}", path.display()))?;

    let players: Vec<Player> =
        serde_json::from_str(&json).context("Failed to parse roster file")?;

    info!("Loaded {} players from {}", players.len(), path.display());
    Ok(players)
}

/// Write a roster back to a JSON file.
pub fn save_roster<P: AsRef<Path>>(path: P, players: &[Player]) -> Result<()> {
    let path = path.as_ref();

    let json = serde_json::to_string_pretty(players).context("Failed to serialize roster")?;

    fs::write(path, json)
        .with_context(|| format!("Failed to write roster file: {}", path.display()))?;

    info!("Saved {} players to {}", players.len(), path.display());
    Ok(())
}
