use crate::error::{Result, ScoringError};
use crate::fielding::FieldingType;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt::{self, Display};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Base {
    #[display(fmt = "1")]
    First,
    #[display(fmt = "2")]
    Second,
    #[display(fmt = "3")]
    Third,
    #[display(fmt = "H")]
    Home,
}

impl Base {
    /// Bases touched getting here from home plate; a run is 4.
    pub fn index(self) -> u8 {
        match self {
            Base::First => 1,
            Base::Second => 2,
            Base::Third => 3,
            Base::Home => 4,
        }
    }

    fn from_index(index: u8) -> Option<Base> {
        match index {
            1 => Some(Base::First),
            2 => Some(Base::Second),
            3 => Some(Base::Third),
            4..=u8::MAX => Some(Base::Home),
            _ => None,
        }
    }

    /// Where a runner standing here ends up after moving `bases` bases. Everything past third is
    /// home.
    pub fn forward(self, bases: u8) -> Base {
        Base::from_index(self.index().saturating_add(bases)).unwrap_or(Base::Home)
    }

    /// Where a batter ends up after reaching `bases` bases.
    pub fn reached(bases: u8) -> Option<Base> {
        Base::from_index(bases)
    }
}

/// Occupancy of first, second and third for one diamond.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bases {
    pub first: bool,
    pub second: bool,
    pub third: bool,
}

impl Bases {
    pub fn only(base: Base) -> Bases {
        let mut bases = Bases::default();
        match base {
            Base::First => bases.first = true,
            Base::Second => bases.second = true,
            Base::Third => bases.third = true,
            Base::Home => {}
        }
        bases
    }

    pub fn is_empty(&self) -> bool {
        !(self.first || self.second || self.third)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum ResultCode {
    #[display(fmt = "K")]
    #[serde(rename = "K")]
    Strikeout,
    #[display(fmt = "ꓘ")]
    #[serde(rename = "ꓘ")]
    StrikeoutLooking,
    #[display(fmt = "BB")]
    #[serde(rename = "BB")]
    Walk,
    #[display(fmt = "1B")]
    #[serde(rename = "1B")]
    Single,
    #[display(fmt = "2B")]
    #[serde(rename = "2B")]
    Double,
    #[display(fmt = "3B")]
    #[serde(rename = "3B")]
    Triple,
    #[display(fmt = "HR")]
    #[serde(rename = "HR")]
    HomeRun,
}

impl ResultCode {
    pub const ALL: [ResultCode; 7] = [
        ResultCode::Strikeout,
        ResultCode::StrikeoutLooking,
        ResultCode::Walk,
        ResultCode::Single,
        ResultCode::Double,
        ResultCode::Triple,
        ResultCode::HomeRun,
    ];

    pub fn is_hit(self) -> bool {
        matches!(
            self,
            ResultCode::Single | ResultCode::Double | ResultCode::Triple | ResultCode::HomeRun
        )
    }

    pub fn is_strikeout(self) -> bool {
        matches!(self, ResultCode::Strikeout | ResultCode::StrikeoutLooking)
    }

    /// Outs the result makes on its own, without a fielding play.
    pub fn outs(self) -> u32 {
        if self.is_strikeout() {
            1
        } else {
            0
        }
    }

    /// Bases every runner (and the batter) moves.
    pub fn bases(self) -> u8 {
        match self {
            ResultCode::Strikeout | ResultCode::StrikeoutLooking => 0,
            ResultCode::Walk | ResultCode::Single => 1,
            ResultCode::Double => 2,
            ResultCode::Triple => 3,
            ResultCode::HomeRun => 4,
        }
    }
}

impl FromStr for ResultCode {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<ResultCode> {
        ResultCode::ALL
            .iter()
            .copied()
            .find(|code| code.to_string() == s)
            .ok_or_else(|| ScoringError::InvalidResultCode(s.to_owned()))
    }
}

/// Parses a batting result as entered; the empty string is "no result".
pub fn parse_result(code: &str) -> Result<Option<ResultCode>> {
    if code.is_empty() {
        Ok(None)
    } else {
        code.parse().map(Some)
    }
}

/// A runner's movement from one base to a later one, written `1-2`, `2-3`, `3-H`, `1-3` and so
/// on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Route {
    pub from: Base,
    pub to: Base,
}

impl Route {
    pub fn new(from: Base, to: Base) -> Result<Route> {
        if from == Base::Home || to <= from {
            Err(ScoringError::InvalidRoute(format!("{}-{}", from, to)))
        } else {
            Ok(Route { from, to })
        }
    }

    pub fn scores(self) -> bool {
        self.to == Base::Home
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

impl FromStr for Route {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Route> {
        let invalid = || ScoringError::InvalidRoute(s.to_owned());
        let (from, to) = s.split_once('-').ok_or_else(invalid)?;
        let base = |token: &str| match token {
            "1" => Ok(Base::First),
            "2" => Ok(Base::Second),
            "3" => Ok(Base::Third),
            "H" => Ok(Base::Home),
            _ => Err(invalid()),
        };
        Route::new(base(from)?, base(to)?).map_err(|_| invalid())
    }
}

impl From<Route> for String {
    fn from(route: Route) -> String {
        route.to_string()
    }
}

impl TryFrom<String> for Route {
    type Error = ScoringError;

    fn try_from(s: String) -> Result<Route> {
        s.parse()
    }
}

/// One player's plate appearance in one inning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCell {
    pub result: Option<ResultCode>,
    /// Where the batter got to on their own plate appearance.
    pub batted_bases: Bases,
    pub scored: bool,
    pub outs_contributed: u32,
    pub fielding_type: Option<FieldingType>,
    pub fielding_display: String,
    /// Movement as a runner, caused by later plate appearances in the same inning.
    pub advances: Vec<Route>,
}

impl ScoreCell {
    pub fn is_empty(&self) -> bool {
        *self == ScoreCell::default()
    }

    /// Whether anything was recorded for the plate appearance itself.
    pub fn has_plate_appearance(&self) -> bool {
        self.result.is_some() || self.outs_contributed > 0 || !self.fielding_display.is_empty()
    }

    pub fn display(&self) -> String {
        if self.fielding_display.is_empty() {
            self.result.map(|code| code.to_string()).unwrap_or_default()
        } else {
            self.fielding_display.clone()
        }
    }

    pub(crate) fn reset_runner_state(&mut self) {
        self.batted_bases = Bases::default();
        self.scored = false;
        self.advances.clear();
    }
}
