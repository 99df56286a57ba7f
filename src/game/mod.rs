pub mod journal;
#[cfg(test)]
mod tests;

use crate::batting;
use crate::book::{Player, TeamScorebook};
use crate::cell::{self, ResultCode, Route};
use crate::config::GameConfig;
use crate::error::Result;
use crate::fielding::{FieldingPlay, FieldingType};
use crate::stats::{self, Stats, TeamTotals};
use crate::table::Table;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[display(fmt = "away")]
    Away,
    #[display(fmt = "home")]
    Home,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Away => Side::Home,
            Side::Home => Side::Away,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AwayHome<T> {
    pub away: T,
    pub home: T,
}

impl<T> AwayHome<T> {
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Away => &self.away,
            Side::Home => &self.home,
        }
    }

    fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Away => &mut self.away,
            Side::Home => &mut self.home,
        }
    }
}

/// Every change the presentation layer can ask for.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    BattingResult {
        team: Side,
        row: usize,
        inning: usize,
        code: String,
    },
    FieldingPlay {
        team: Side,
        row: usize,
        inning: usize,
        fielders: Vec<u8>,
        #[serde(default)]
        play_type: Option<FieldingType>,
    },
    ManualAdvance {
        team: Side,
        row: usize,
        inning: usize,
    },
    Advance {
        team: Side,
        row: usize,
        inning: usize,
        route: Route,
    },
    MarkRun {
        team: Side,
        row: usize,
        inning: usize,
    },
    ClearCell {
        team: Side,
        row: usize,
        inning: usize,
    },
    CompleteInning {
        team: Side,
        inning: usize,
    },
    AddInning {
        team: Side,
    },
    AddPlayer {
        team: Side,
    },
    SetPlayer {
        team: Side,
        row: usize,
        name: String,
        position: String,
    },
}

impl Event {
    pub fn kind(&self) -> &'static str {
        match self {
            Event::BattingResult { .. } => "batting_result",
            Event::FieldingPlay { .. } => "fielding_play",
            Event::ManualAdvance { .. } => "manual_advance",
            Event::Advance { .. } => "advance",
            Event::MarkRun { .. } => "mark_run",
            Event::ClearCell { .. } => "clear_cell",
            Event::CompleteInning { .. } => "complete_inning",
            Event::AddInning { .. } => "add_inning",
            Event::AddPlayer { .. } => "add_player",
            Event::SetPlayer { .. } => "set_player",
        }
    }
}

/// Both teams' scorebooks. Each book is only ever replaced whole: every operation works on a
/// copy and swaps it in when it succeeds, so an `Arc` handed out by [`Game::team`] never changes
/// underneath its holder and a failed operation leaves nothing behind.
#[derive(Debug, Clone, Serialize)]
pub struct Game {
    teams: AwayHome<Arc<TeamScorebook>>,
    active: Side,
}

impl Game {
    pub fn new(config: &GameConfig) -> Game {
        Game {
            teams: AwayHome {
                away: Arc::new(TeamScorebook::new(
                    &config.away,
                    config.players,
                    config.innings,
                )),
                home: Arc::new(TeamScorebook::new(
                    &config.home,
                    config.players,
                    config.innings,
                )),
            },
            active: Side::Away,
        }
    }

    pub fn team(&self, side: Side) -> Arc<TeamScorebook> {
        Arc::clone(self.teams.get(side))
    }

    pub fn book(&self, side: Side) -> &TeamScorebook {
        self.teams.get(side)
    }

    /// The team currently at bat.
    pub fn active(&self) -> Side {
        self.active
    }

    pub fn push(&mut self, event: &Event) -> Result<()> {
        match event {
            Event::BattingResult {
                team,
                row,
                inning,
                code,
            } => self.record_batting_result(*team, *row, *inning, code),
            Event::FieldingPlay {
                team,
                row,
                inning,
                fielders,
                play_type,
            } => self.record_fielding_play(*team, *row, *inning, fielders, *play_type),
            Event::ManualAdvance { team, row, inning } => {
                self.manual_advance(*team, *row, *inning).map(drop)
            }
            Event::Advance {
                team,
                row,
                inning,
                route,
            } => self.record_advance(*team, *row, *inning, *route),
            Event::MarkRun { team, row, inning } => self.mark_run(*team, *row, *inning),
            Event::ClearCell { team, row, inning } => self.clear_cell(*team, *row, *inning),
            Event::CompleteInning { team, inning } => self.complete_inning(*team, *inning),
            Event::AddInning { team } => {
                self.add_inning(*team);
                Ok(())
            }
            Event::AddPlayer { team } => {
                self.add_player(*team);
                Ok(())
            }
            Event::SetPlayer {
                team,
                row,
                name,
                position,
            } => self.set_player(*team, *row, name, position),
        }
    }

    pub fn record_batting_result(
        &mut self,
        side: Side,
        row: usize,
        inning: usize,
        code: &str,
    ) -> Result<()> {
        let result = cell::parse_result(code)?;
        self.record_result(side, row, inning, result)
    }

    pub fn record_result(
        &mut self,
        side: Side,
        row: usize,
        inning: usize,
        result: Option<ResultCode>,
    ) -> Result<()> {
        self.transition(side, |book| {
            book.check_open(row, inning)?;
            book.record_result(row, inning, result);
            Ok(())
        })?;
        log::debug!(
            "recorded {} for {} row {} inning {}",
            result.map(|code| code.to_string()).unwrap_or_default(),
            side,
            row,
            inning
        );
        Ok(())
    }

    pub fn record_fielding_play(
        &mut self,
        side: Side,
        row: usize,
        inning: usize,
        fielders: &[u8],
        play_type: Option<FieldingType>,
    ) -> Result<()> {
        let play = FieldingPlay::new(fielders.to_vec(), play_type)?;
        self.record_fielding(side, row, inning, &play)
    }

    pub fn record_fielding(
        &mut self,
        side: Side,
        row: usize,
        inning: usize,
        play: &FieldingPlay,
    ) -> Result<()> {
        self.transition(side, |book| {
            book.check_open(row, inning)?;
            book.record_fielding(row, inning, play);
            Ok(())
        })?;
        log::debug!(
            "recorded {} for {} row {} inning {}",
            play,
            side,
            row,
            inning
        );
        Ok(())
    }

    /// Moves the row's runner up one base. Returns whether anything moved.
    pub fn manual_advance(&mut self, side: Side, row: usize, inning: usize) -> Result<bool> {
        let mut moved = false;
        self.transition(side, |book| {
            book.check_open(row, inning)?;
            moved = book.nudge(row, inning);
            Ok(())
        })?;
        Ok(moved)
    }

    pub fn record_advance(
        &mut self,
        side: Side,
        row: usize,
        inning: usize,
        route: Route,
    ) -> Result<()> {
        self.transition(side, |book| {
            book.check_open(row, inning)?;
            book.take_route(row, inning, route);
            Ok(())
        })
    }

    pub fn mark_run(&mut self, side: Side, row: usize, inning: usize) -> Result<()> {
        self.transition(side, |book| {
            book.check_open(row, inning)?;
            book.mark_run(row, inning);
            Ok(())
        })
    }

    pub fn clear_cell(&mut self, side: Side, row: usize, inning: usize) -> Result<()> {
        self.transition(side, |book| {
            book.check_open(row, inning)?;
            book.clear(row, inning);
            Ok(())
        })
    }

    /// Closes a half-inning with three or more outs. Nothing in the inning can change after this.
    pub fn complete_inning(&mut self, side: Side, inning: usize) -> Result<()> {
        self.transition(side, |book| {
            book.check_eligible(inning)?;
            let last = book.innings[inning]
                .last_batter()
                .unwrap_or(book.next_batter);
            book.innings[inning].complete = true;
            book.next_batter = (last + 1) % book.players().max(1);
            book.next_inning = inning + 1;
            Ok(())
        })?;
        self.active = side.other();

        let book = self.book(side);
        log::info!(
            "{} completed inning {}, {} leads off inning {}",
            side,
            inning,
            book.next_batter,
            book.next_inning
        );
        Ok(())
    }

    pub fn add_inning(&mut self, side: Side) {
        let mut next = TeamScorebook::clone(self.teams.get(side));
        next.add_inning();
        *self.teams.get_mut(side) = Arc::new(next);
    }

    pub fn add_player(&mut self, side: Side) {
        let mut next = TeamScorebook::clone(self.teams.get(side));
        next.add_player();
        *self.teams.get_mut(side) = Arc::new(next);
    }

    pub fn set_player(&mut self, side: Side, row: usize, name: &str, position: &str) -> Result<()> {
        self.transition(side, |book| {
            book.check_row(row)?;
            book.lineup[row] = Player {
                name: name.to_owned(),
                position: position.to_owned(),
            };
            Ok(())
        })
    }

    pub fn team_totals(&self, side: Side) -> TeamTotals {
        stats::team_totals(self.book(side))
    }

    pub fn game_stats(&self, side: Side, row: usize) -> Result<Stats> {
        stats::game_stats(self.book(side), row)
    }

    pub fn line_score(&self, side: Side) -> Vec<u32> {
        stats::line_score(self.book(side))
    }

    pub fn box_score(&self, side: Side) -> Result<Table<{ batting::COLS }>> {
        batting::box_score(self.book(side))
    }

    fn transition<F>(&mut self, side: Side, f: F) -> Result<()>
    where
        F: FnOnce(&mut TeamScorebook) -> Result<()>,
    {
        let mut next = TeamScorebook::clone(self.teams.get(side));
        f(&mut next)?;
        *self.teams.get_mut(side) = Arc::new(next);
        Ok(())
    }
}
