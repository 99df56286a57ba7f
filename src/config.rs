use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    pub innings: usize,
    pub players: usize,
    pub away: TeamConfig,
    pub home: TeamConfig,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            innings: 3,
            players: 9,
            away: TeamConfig::named("AWAY"),
            home: TeamConfig::named("HOME"),
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<GameConfig> {
        let value: serde_json::Value = serde_json::from_str(json).context("invalid game config")?;
        ensure!(value.is_object(), "game config must be a JSON object");
        let config: GameConfig = serde_json::from_value(value).context("invalid game config")?;
        ensure!(config.players > 0, "a team needs at least one player");
        Ok(config)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TeamConfig {
    pub name: String,
    pub lineup: Vec<String>,
    pub positions: Vec<String>,
}

impl TeamConfig {
    pub fn named(name: impl Into<String>) -> TeamConfig {
        TeamConfig {
            name: name.into(),
            ..TeamConfig::default()
        }
    }
}
