use crate::book::TeamScorebook;
use crate::error::Result;
use crate::stats::{self, Stats};
use crate::table::{row, Table, Value};

pub const COLS: usize = 10;

/// The batting box score: one row per lineup slot plus team totals. Only completed innings
/// count.
pub fn box_score(book: &TeamScorebook) -> Result<Table<COLS>> {
    let mut table = Table::new([
        ("Player", "Player"),
        ("Position", "Pos"),
        ("At Bats", "AB"),
        ("Runs Scored", "R"),
        ("Hits", "H"),
        ("Home Runs", "HR"),
        ("Runs Batted In", "RBI"),
        ("Bases on Balls (Walks)", "BB"),
        ("Strikeouts", "SO"),
        ("Batting Average", "AVG"),
    ]);

    let mut totals = Stats::default();
    for (row, player) in book.lineup.iter().enumerate() {
        let stats = stats::game_stats(book, row)?;
        totals += stats;
        table.push(build_row(&player.name, &player.position, stats));
    }

    Ok(table.with_totals(build_row("Totals", "", totals)))
}

fn build_row(name: &str, position: &str, stats: Stats) -> [Value; COLS] {
    row![
        name,
        position,
        stats.at_bats,
        stats.runs,
        stats.hits(),
        stats.home_runs,
        stats.runs_batted_in,
        stats.walks,
        stats.strike_outs,
        stats.batting_average(),
    ]
}
