use crate::config::GameConfig;
use crate::game::{Event, Game};
use anyhow::{Context, Result};
use json_patch::Patch;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

/// One line of the game's debug log: what each event changed, or why it was turned down.
#[derive(Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum LogEntry {
    Ok { description: String, patch: Patch },
    Err { description: String, error: String },
}

impl LogEntry {
    pub fn description(&self) -> &str {
        match self {
            LogEntry::Ok { description, .. } | LogEntry::Err { description, .. } => description,
        }
    }

    pub fn is_err(&self) -> bool {
        matches!(self, LogEntry::Err { .. })
    }

    pub fn info(&self) -> Cow<'_, str> {
        match self {
            LogEntry::Ok { patch, .. } => patch
                .0
                .iter()
                .map(|p| {
                    serde_json::to_string(p)
                        .unwrap_or_else(|_| "[failed to serialize patch]".to_string())
                })
                .collect::<Vec<_>>()
                .join("\n")
                .into(),
            LogEntry::Err { error, .. } => error.into(),
        }
    }
}

/// Builds a game from scratch, keeping a JSON patch for every event it accepts. Rejected events
/// are logged and skipped, same as they would be at the scorer's table.
pub fn replay(config: &GameConfig, events: &[Event]) -> Result<(Game, Vec<LogEntry>)> {
    let mut game = Game::new(config);
    let mut old = serde_json::to_value(&game)?;
    let mut log = Vec::with_capacity(events.len());
    for (i, event) in events.iter().enumerate() {
        let description = serde_json::to_string(event)?;
        match game.push(event) {
            Ok(()) => {
                let new: Value = serde_json::to_value(&game)?;
                let patch = json_patch::diff(&old, &new);
                log.push(LogEntry::Ok { description, patch });
                old = new;
            }
            Err(err) => {
                log::error!("event {} ({}) rejected: {}", i, event.kind(), err);
                log.push(LogEntry::Err {
                    description,
                    error: err.to_string(),
                });
            }
        }
    }
    Ok((game, log))
}

/// Applies every event, stopping at the first one the game refuses.
pub fn apply_all(game: &mut Game, events: &[Event]) -> Result<()> {
    for (i, event) in events.iter().enumerate() {
        game.push(event)
            .with_context(|| format!("while processing event {}, type {}", i, event.kind()))?;
    }
    Ok(())
}

/// Reads a JSON array of events.
pub fn parse_events(json: &str) -> Result<Vec<Event>> {
    serde_json::from_str(json).context("failed to parse event list")
}
