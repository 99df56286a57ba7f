//! Scoring state for a paper-style baseball scorebook: one grid of cells per team, runners moved
//! automatically from batting results, outs counted per half-inning, and stats drawn from
//! completed innings.

pub mod batting;
pub mod book;
pub mod cell;
pub mod config;
pub mod error;
pub mod export;
pub mod fielding;
pub mod game;
pub mod outs;
pub mod percentage;
pub mod runners;
pub mod stats;
pub mod table;

pub use crate::book::TeamScorebook;
pub use crate::cell::{ResultCode, Route, ScoreCell};
pub use crate::config::GameConfig;
pub use crate::error::{Result, ScoringError};
pub use crate::fielding::{FieldingPlay, FieldingTool, FieldingType};
pub use crate::game::journal::{replay, LogEntry};
pub use crate::game::{Event, Game, Side};
