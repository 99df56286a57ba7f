use crate::book::TeamScorebook;
use crate::cell::ResultCode;
use crate::error::Result;
use crate::fielding::FieldingType;
use crate::percentage::Pct;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::AddAssign;

/// Runs, hits and errors for the score bug.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TeamTotals {
    pub runs: u32,
    pub hits: u32,
    pub errors: u32,
}

/// One player's line for the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Stats {
    pub plate_appearances: u32,
    pub at_bats: u32,
    pub singles: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
    pub runs: u32,
    // the runner's own scored cells, not the runs this batter drove in
    pub runs_batted_in: u32,
    pub walks: u32,
    pub strike_outs: u32,
}

impl Stats {
    pub fn hits(&self) -> u32 {
        self.singles + self.doubles + self.triples + self.home_runs
    }

    pub fn total_bases(&self) -> u32 {
        self.singles + 2 * self.doubles + 3 * self.triples + 4 * self.home_runs
    }

    pub fn batting_average(&self) -> Pct<3> {
        Pct::new(self.hits(), self.at_bats)
    }
}

impl AddAssign for Stats {
    fn add_assign(&mut self, other: Stats) {
        self.plate_appearances += other.plate_appearances;
        self.at_bats += other.at_bats;
        self.singles += other.singles;
        self.doubles += other.doubles;
        self.triples += other.triples;
        self.home_runs += other.home_runs;
        self.runs += other.runs;
        self.runs_batted_in += other.runs_batted_in;
        self.walks += other.walks;
        self.strike_outs += other.strike_outs;
    }
}

impl Sum for Stats {
    fn sum<I: Iterator<Item = Stats>>(iter: I) -> Stats {
        iter.fold(Stats::default(), |mut acc, stats| {
            acc += stats;
            acc
        })
    }
}

pub fn team_totals(book: &TeamScorebook) -> TeamTotals {
    let mut totals = TeamTotals::default();
    for cell in book.book.iter().flatten() {
        if cell.scored {
            totals.runs += 1;
        }
        if cell.result.map_or(false, ResultCode::is_hit) {
            totals.hits += 1;
        }
        if cell.fielding_type == Some(FieldingType::Error) {
            totals.errors += 1;
        }
    }
    totals
}

/// Runs scored in each inning.
pub fn line_score(book: &TeamScorebook) -> Vec<u32> {
    (0..book.inning_count())
        .map(|inning| {
            book.column_cells(inning)
                .filter(|cell| cell.scored)
                .count() as u32
        })
        .collect()
}

/// A player's game so far. Only completed innings count.
pub fn game_stats(book: &TeamScorebook, row: usize) -> Result<Stats> {
    book.check_row(row)?;
    let mut stats = Stats::default();
    for inning in 0..book.inning_count() {
        let cell = book.cell(row, inning)?;
        if !book.is_complete(inning) || !cell.has_plate_appearance() {
            continue;
        }

        stats.plate_appearances += 1;
        match cell.result {
            Some(ResultCode::Walk) => stats.walks += 1,
            Some(ResultCode::Single) => stats.singles += 1,
            Some(ResultCode::Double) => stats.doubles += 1,
            Some(ResultCode::Triple) => stats.triples += 1,
            Some(ResultCode::HomeRun) => stats.home_runs += 1,
            Some(ResultCode::Strikeout) | Some(ResultCode::StrikeoutLooking) => {
                stats.strike_outs += 1
            }
            None => {}
        }
        if cell.result != Some(ResultCode::Walk) {
            stats.at_bats += 1;
        }
        if cell.scored {
            stats.runs += 1;
            stats.runs_batted_in += 1;
        }
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TeamConfig;

    fn book() -> TeamScorebook {
        TeamScorebook::new(&TeamConfig::named("AWAY"), 4, 3)
    }

    #[test]
    fn totals() {
        let mut book = book();
        book.record_result(0, 0, Some(ResultCode::Single));
        book.record_result(1, 0, Some(ResultCode::HomeRun));
        book.record_result(2, 0, Some(ResultCode::Walk));
        book.record_fielding(3, 0, &"E5".parse().unwrap());
        book.record_result(0, 1, Some(ResultCode::Double));

        assert_eq!(
            team_totals(&book),
            TeamTotals {
                runs: 2,
                hits: 3,
                errors: 1,
            }
        );
        assert_eq!(line_score(&book), [2, 0, 0]);
    }

    #[test]
    fn only_completed_innings() {
        let mut book = book();
        book.record_result(0, 0, Some(ResultCode::HomeRun));
        book.record_result(0, 1, Some(ResultCode::Walk));
        book.record_fielding(0, 2, &"F8".parse().unwrap());

        assert_eq!(game_stats(&book, 0), Ok(Stats::default()));
        assert_eq!(game_stats(&book, 0).unwrap().batting_average().to_string(), "--");

        book.innings[0].complete = true;
        book.innings[1].complete = true;
        book.innings[2].complete = true;
        let stats = game_stats(&book, 0).unwrap();
        assert_eq!(stats.plate_appearances, 3);
        assert_eq!(stats.at_bats, 2);
        assert_eq!(stats.hits(), 1);
        assert_eq!(stats.home_runs, 1);
        assert_eq!(stats.walks, 1);
        assert_eq!(stats.runs, 1);
        assert_eq!(stats.runs_batted_in, 1);
        assert_eq!(stats.total_bases(), 4);
        assert_eq!(stats.batting_average().to_string(), ".500");

        // an empty cell is not a plate appearance
        assert_eq!(game_stats(&book, 1).unwrap().plate_appearances, 0);
        assert!(game_stats(&book, 4).is_err());
    }

    #[test]
    fn sums() {
        let a = Stats {
            at_bats: 4,
            singles: 1,
            ..Stats::default()
        };
        let b = Stats {
            at_bats: 6,
            doubles: 2,
            ..Stats::default()
        };
        let total: Stats = [a, b].into_iter().sum();
        assert_eq!(total.at_bats, 10);
        assert_eq!(total.hits(), 3);
        assert_eq!(total.batting_average().to_string(), ".300");
    }
}
