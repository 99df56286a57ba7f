use crate::error::{Result, ScoringError};
use derive_more::Display;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum FieldingType {
    #[display(fmt = "F")]
    #[serde(rename = "F")]
    Fly,
    #[display(fmt = "E")]
    #[serde(rename = "E")]
    Error,
    #[display(fmt = "L")]
    #[serde(rename = "L")]
    Line,
    #[display(fmt = "DP")]
    #[serde(rename = "DP")]
    DoublePlay,
    #[display(fmt = "TP")]
    #[serde(rename = "TP")]
    TriplePlay,
    #[display(fmt = "U")]
    #[serde(rename = "U")]
    Unassisted,
}

impl FieldingType {
    pub const ALL: [FieldingType; 6] = [
        FieldingType::Fly,
        FieldingType::Error,
        FieldingType::Line,
        FieldingType::DoublePlay,
        FieldingType::TriplePlay,
        FieldingType::Unassisted,
    ];

    pub fn outs(self) -> u32 {
        match self {
            FieldingType::DoublePlay => 2,
            FieldingType::TriplePlay => 3,
            _ => 1,
        }
    }

    /// `F8`, `E5` and `L6-3` put the type first; everything else follows the fielders.
    fn is_prefix(self) -> bool {
        matches!(
            self,
            FieldingType::Fly | FieldingType::Error | FieldingType::Line
        )
    }
}

impl FromStr for FieldingType {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<FieldingType> {
        FieldingType::ALL
            .iter()
            .copied()
            .find(|ty| ty.to_string() == s)
            .ok_or_else(|| ScoringError::InvalidPlayType(s.to_owned()))
    }
}

/// An ordered fielder sequence (position numbers 1-9) with an optional play type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldingPlay {
    fielders: Vec<u8>,
    play_type: Option<FieldingType>,
}

impl FieldingPlay {
    pub fn new(fielders: Vec<u8>, play_type: Option<FieldingType>) -> Result<FieldingPlay> {
        if fielders.is_empty() {
            return Err(ScoringError::InvalidSequence);
        }
        if let Some(fielder) = fielders.iter().copied().find(|n| !(1..=9).contains(n)) {
            return Err(ScoringError::InvalidFielder(fielder));
        }
        Ok(FieldingPlay {
            fielders,
            play_type,
        })
    }

    pub fn fielders(&self) -> &[u8] {
        &self.fielders
    }

    pub fn play_type(&self) -> Option<FieldingType> {
        self.play_type
    }

    pub fn outs(&self) -> u32 {
        self.play_type.map_or(1, FieldingType::outs)
    }

    fn sequence(&self) -> String {
        self.fielders.iter().join("-")
    }
}

impl Display for FieldingPlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.play_type {
            Some(ty) if ty.is_prefix() => write!(f, "{}{}", ty, self.sequence()),
            Some(ty) => write!(f, "{} {}", self.sequence(), ty),
            None => f.write_str(&self.sequence()),
        }
    }
}

impl FromStr for FieldingPlay {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<FieldingPlay> {
        let s = s.trim();
        let (sequence, play_type) = if let Some((sequence, suffix)) = s.rsplit_once(' ') {
            (sequence.trim_end(), Some(suffix.parse::<FieldingType>()?))
        } else if let Some(ty) = FieldingType::ALL
            .iter()
            .copied()
            .filter(|ty| ty.is_prefix())
            .find(|ty| s.starts_with(&ty.to_string()))
        {
            (&s[ty.to_string().len()..], Some(ty))
        } else {
            (s, None)
        };

        if sequence.is_empty() {
            return Err(ScoringError::InvalidSequence);
        }
        let fielders = sequence
            .split('-')
            .map(|n| {
                n.parse::<u8>()
                    .map_err(|_| ScoringError::InvalidSequence)
            })
            .collect::<Result<Vec<_>>>()?;
        FieldingPlay::new(fielders, play_type)
    }
}

/// Builds a fielding play one fielder at a time, the way it is tapped in while the ball is still
/// moving. A successful [`commit`](FieldingTool::commit) empties the tool; that is the caller's
/// cue to close it.
#[derive(Debug, Clone, Default)]
pub struct FieldingTool {
    sequence: Vec<u8>,
    play_type: Option<FieldingType>,
}

impl FieldingTool {
    pub fn new() -> FieldingTool {
        FieldingTool::default()
    }

    pub fn push_fielder(&mut self, fielder: u8) -> Result<()> {
        if !(1..=9).contains(&fielder) {
            return Err(ScoringError::InvalidFielder(fielder));
        }
        self.sequence.push(fielder);
        Ok(())
    }

    /// Does not touch the fielders already entered.
    pub fn select_type(&mut self, play_type: Option<FieldingType>) {
        self.play_type = play_type;
    }

    /// Discards the fielders without committing. The selected type stays.
    pub fn clear(&mut self) {
        self.sequence.clear();
    }

    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    pub fn play_type(&self) -> Option<FieldingType> {
        self.play_type
    }

    pub fn preview(&self) -> String {
        if self.sequence.is_empty() {
            self.play_type.map(|ty| ty.to_string()).unwrap_or_default()
        } else {
            FieldingPlay {
                fielders: self.sequence.clone(),
                play_type: self.play_type,
            }
            .to_string()
        }
    }

    pub fn commit(&mut self) -> Result<FieldingPlay> {
        let play = FieldingPlay::new(self.sequence.clone(), self.play_type)?;
        self.sequence.clear();
        self.play_type = None;
        Ok(play)
    }
}
