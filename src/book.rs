use crate::cell::{Bases, ResultCode, Route, ScoreCell};
use crate::config::TeamConfig;
use crate::error::{Result, ScoringError};
use crate::fielding::FieldingPlay;
use crate::runners::{self, RunnerBases};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Player {
    pub name: String,
    pub position: String,
}

/// Something done to a column that can move runners, or that marks a plate appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "play", rename_all = "snake_case")]
pub(crate) enum Play {
    Batting { row: usize, result: ResultCode },
    Fielded { row: usize },
    Nudge { row: usize },
    Route { row: usize, route: Route },
    Run { row: usize },
}

impl Play {
    fn row(self) -> usize {
        match self {
            Play::Batting { row, .. }
            | Play::Fielded { row }
            | Play::Nudge { row }
            | Play::Route { row, .. }
            | Play::Run { row } => row,
        }
    }

    fn is_plate_appearance(self) -> bool {
        matches!(self, Play::Batting { .. } | Play::Fielded { .. })
    }
}

/// Per-inning state for one team.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Column {
    pub bases: RunnerBases,
    pub complete: bool,
    plays: Vec<Play>,
}

impl Column {
    /// Row of the most recent plate appearance recorded in this inning.
    pub fn last_batter(&self) -> Option<usize> {
        self.plays
            .iter()
            .rev()
            .find(|play| play.is_plate_appearance())
            .map(|play| play.row())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamScorebook {
    pub name: String,
    pub lineup: Vec<Player>,
    // indexed by [row][inning]
    pub book: Vec<Vec<ScoreCell>>,
    pub innings: Vec<Column>,
    pub next_batter: usize,
    pub next_inning: usize,
}

impl TeamScorebook {
    pub fn new(config: &TeamConfig, players: usize, innings: usize) -> TeamScorebook {
        let lineup = (0..players)
            .map(|i| Player {
                name: config.lineup.get(i).cloned().unwrap_or_default(),
                position: config.positions.get(i).cloned().unwrap_or_default(),
            })
            .collect();
        TeamScorebook {
            name: config.name.clone(),
            lineup,
            book: vec![vec![ScoreCell::default(); innings]; players],
            innings: vec![Column::default(); innings],
            next_batter: 0,
            next_inning: 0,
        }
    }

    pub fn players(&self) -> usize {
        self.book.len()
    }

    pub fn inning_count(&self) -> usize {
        self.innings.len()
    }

    pub fn cell(&self, row: usize, inning: usize) -> Result<&ScoreCell> {
        self.check_range(row, inning)?;
        Ok(&self.book[row][inning])
    }

    pub fn column(&self, inning: usize) -> Result<&Column> {
        self.innings.get(inning).ok_or(ScoringError::CoordinateOutOfRange {
            row: 0,
            inning,
            rows: self.players(),
            innings: self.inning_count(),
        })
    }

    /// Cells of one inning, in batting order.
    pub fn column_cells(&self, inning: usize) -> impl Iterator<Item = &ScoreCell> + '_ {
        self.book.iter().filter_map(move |row| row.get(inning))
    }

    pub fn is_complete(&self, inning: usize) -> bool {
        self.innings.get(inning).map_or(false, |column| column.complete)
    }

    fn check_range(&self, row: usize, inning: usize) -> Result<()> {
        if row < self.players() && inning < self.inning_count() {
            Ok(())
        } else {
            Err(ScoringError::CoordinateOutOfRange {
                row,
                inning,
                rows: self.players(),
                innings: self.inning_count(),
            })
        }
    }

    pub(crate) fn check_row(&self, row: usize) -> Result<()> {
        if row < self.players() {
            Ok(())
        } else {
            Err(ScoringError::CoordinateOutOfRange {
                row,
                inning: 0,
                rows: self.players(),
                innings: self.inning_count(),
            })
        }
    }

    /// Checks that the cell exists and its inning is still open.
    pub(crate) fn check_open(&self, row: usize, inning: usize) -> Result<()> {
        self.check_range(row, inning)?;
        if self.innings[inning].complete {
            return Err(ScoringError::InningComplete(inning));
        }
        Ok(())
    }

    pub(crate) fn add_inning(&mut self) {
        for row in &mut self.book {
            row.push(ScoreCell::default());
        }
        self.innings.push(Column::default());
    }

    pub(crate) fn add_player(&mut self) {
        self.lineup.push(Player::default());
        self.book
            .push(vec![ScoreCell::default(); self.inning_count()]);
    }

    pub(crate) fn record_result(&mut self, row: usize, inning: usize, result: Option<ResultCode>) {
        let cell = &mut self.book[row][inning];
        cell.result = result;
        if cell.fielding_type.is_none() && cell.fielding_display.is_empty() {
            cell.outs_contributed = result.map_or(0, ResultCode::outs);
        }

        let plays = &mut self.innings[inning].plays;
        let existing = plays
            .iter()
            .position(|play| matches!(play, Play::Batting { row: r, .. } if *r == row));
        match (existing, result) {
            (Some(i), Some(result)) => plays[i] = Play::Batting { row, result },
            (Some(i), None) => {
                plays.remove(i);
            }
            (None, Some(result)) => plays.push(Play::Batting { row, result }),
            (None, None) => {}
        }
        self.replay(inning);
    }

    pub(crate) fn record_fielding(&mut self, row: usize, inning: usize, play: &FieldingPlay) {
        let cell = &mut self.book[row][inning];
        cell.outs_contributed = play.outs();
        cell.fielding_type = play.play_type();
        cell.fielding_display = play.to_string();

        let plays = &mut self.innings[inning].plays;
        if !plays.contains(&Play::Fielded { row }) {
            plays.push(Play::Fielded { row });
        }
    }

    /// Returns false when the row has nowhere to go.
    pub(crate) fn nudge(&mut self, row: usize, inning: usize) -> bool {
        if self.book[row][inning].batted_bases.is_empty() {
            return false;
        }
        match runners::nudge(row, self.innings[inning].bases) {
            Some(_) => {
                self.push_play(inning, Play::Nudge { row });
                true
            }
            None => false,
        }
    }

    pub(crate) fn take_route(&mut self, row: usize, inning: usize, route: Route) {
        self.push_play(inning, Play::Route { row, route });
    }

    pub(crate) fn mark_run(&mut self, row: usize, inning: usize) {
        self.push_play(inning, Play::Run { row });
    }

    /// Empties the cell and takes back everything its plays did to the rest of the inning.
    pub(crate) fn clear(&mut self, row: usize, inning: usize) {
        self.book[row][inning] = ScoreCell::default();
        self.innings[inning].plays.retain(|play| play.row() != row);
        self.replay(inning);
    }

    fn push_play(&mut self, inning: usize, play: Play) {
        let bases = self.innings[inning].bases;
        self.innings[inning].bases = self.apply(inning, play, bases);
        self.innings[inning].plays.push(play);
    }

    /// Rebuilds every cell's runner state in the inning, and the inning's snapshot, from its
    /// plays.
    fn replay(&mut self, inning: usize) {
        for row in &mut self.book {
            row[inning].reset_runner_state();
        }
        let plays = self.innings[inning].plays.clone();
        let bases = plays.into_iter().fold(RunnerBases::default(), |bases, play| {
            self.apply(inning, play, bases)
        });
        self.innings[inning].bases = bases;
    }

    fn apply(&mut self, inning: usize, play: Play, bases: RunnerBases) -> RunnerBases {
        match play {
            Play::Batting { row, result } => {
                let advancement = runners::advance(Some(result), row, bases);
                let cell = &mut self.book[row][inning];
                cell.batted_bases = advancement.batter_bases;
                if advancement.batter_scored {
                    cell.scored = true;
                }
                for (runner, routes) in &advancement.runners {
                    let cell = &mut self.book[*runner][inning];
                    cell.advances.extend(routes.iter().copied());
                    if routes.iter().any(|route| route.scores()) {
                        cell.scored = true;
                    }
                }
                advancement.bases
            }
            Play::Fielded { .. } => bases,
            Play::Nudge { row } => match runners::nudge(row, bases) {
                Some(after) => {
                    self.book[row][inning].batted_bases = on_base(row, after);
                    after
                }
                None => bases,
            },
            Play::Route { row, route } => {
                let cell = &mut self.book[row][inning];
                cell.advances.push(route);
                if route.scores() {
                    cell.scored = true;
                }
                runners::take_route(row, route, bases)
            }
            Play::Run { row } => {
                let cell = &mut self.book[row][inning];
                cell.scored = true;
                cell.batted_bases = Bases::default();
                let mut after = bases;
                after.remove(row);
                after
            }
        }
    }
}

/// The diamond to draw on a runner's cell: wherever the snapshot has them.
fn on_base(row: usize, bases: RunnerBases) -> Bases {
    bases.base_of(row).map_or_else(Bases::default, Bases::only)
}
