use crate::cell::{Base, Bases, ResultCode, Route};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Who is standing on each base, by lineup row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerBases {
    pub first: Option<usize>,
    pub second: Option<usize>,
    pub third: Option<usize>,
}

impl RunnerBases {
    pub fn get(&self, base: Base) -> Option<usize> {
        match base {
            Base::First => self.first,
            Base::Second => self.second,
            Base::Third => self.third,
            Base::Home => None,
        }
    }

    fn slot_mut(&mut self, base: Base) -> Option<&mut Option<usize>> {
        match base {
            Base::First => Some(&mut self.first),
            Base::Second => Some(&mut self.second),
            Base::Third => Some(&mut self.third),
            Base::Home => None,
        }
    }

    /// Puts `row` on `base`. Home takes nobody.
    fn set(&mut self, base: Base, row: Option<usize>) {
        if let Some(slot) = self.slot_mut(base) {
            *slot = row;
        }
    }

    pub fn base_of(&self, row: usize) -> Option<Base> {
        self.runners()
            .find(|(_, runner)| *runner == row)
            .map(|(base, _)| base)
    }

    /// Occupied bases, lead runner first.
    pub fn runners(&self) -> impl Iterator<Item = (Base, usize)> + '_ {
        [Base::Third, Base::Second, Base::First]
            .into_iter()
            .filter_map(move |base| self.get(base).map(|row| (base, row)))
    }

    pub fn len(&self) -> usize {
        self.runners().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn remove(&mut self, row: usize) {
        if let Some(base) = self.base_of(row) {
            self.set(base, None);
        }
    }
}

/// Everything one plate appearance does to the runners.
#[derive(Debug, Default, PartialEq)]
pub struct Advancement {
    pub bases: RunnerBases,
    pub batter_bases: Bases,
    pub batter_scored: bool,
    // key: runner row, value: routes taken, in order
    pub runners: IndexMap<usize, Vec<Route>>,
}

impl Advancement {
    /// Runners (not the batter) who crossed home.
    pub fn scored(&self) -> impl Iterator<Item = usize> + '_ {
        self.runners
            .iter()
            .filter(|(_, routes)| routes.iter().any(|route| route.scores()))
            .map(|(row, _)| *row)
    }
}

/// Applies one batting result to the runners on base before it. Every runner moves as many bases
/// as the batter: one on a walk or single, two on a double, all the way home on a triple or home
/// run. Strikeouts and no result leave everyone where they are.
pub fn advance(result: Option<ResultCode>, batter: usize, before: RunnerBases) -> Advancement {
    let bases = match result {
        Some(result) if result.bases() > 0 => result.bases(),
        _ => {
            return Advancement {
                bases: before,
                ..Advancement::default()
            }
        }
    };

    let mut advancement = Advancement::default();
    for (from, runner) in before.runners() {
        let to = from.forward(bases);
        advancement.bases.set(to, Some(runner));
        advancement
            .runners
            .entry(runner)
            .or_default()
            .push(Route { from, to });
    }

    match Base::reached(bases) {
        Some(Base::Home) => advancement.batter_scored = true,
        Some(base) => {
            advancement.bases.set(base, Some(batter));
            advancement.batter_bases = Bases::only(base);
        }
        None => {}
    }

    advancement
}

/// Moves `row` up one base. Off third the runner just leaves the diamond. Nothing happens when
/// the row isn't on base or the next base is taken.
pub fn nudge(row: usize, before: RunnerBases) -> Option<RunnerBases> {
    let from = before.base_of(row)?;
    let to = from.forward(1);
    if before.get(to).is_some() {
        return None;
    }
    let mut after = before;
    after.set(from, None);
    after.set(to, Some(row));
    Some(after)
}

/// Moves `row` along a hand-entered route, if it is standing on the route's starting base and the
/// destination is free.
pub fn take_route(row: usize, route: Route, before: RunnerBases) -> RunnerBases {
    if before.get(route.from) != Some(row) || before.get(route.to).is_some() {
        return before;
    }
    let mut after = before;
    after.set(route.from, None);
    after.set(route.to, Some(row));
    after
}
