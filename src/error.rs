use thiserror::Error;

pub type Result<T, E = ScoringError> = std::result::Result<T, E>;

/// Validation failures. None of these leave the scorebook partially updated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("unrecognized batting result {0:?}")]
    InvalidResultCode(String),

    #[error("fielding sequence is empty")]
    InvalidSequence,

    #[error("fielder {0} is not a position number (1-9)")]
    InvalidFielder(u8),

    #[error("unrecognized fielding play type {0:?}")]
    InvalidPlayType(String),

    #[error("unrecognized advance route {0:?}")]
    InvalidRoute(String),

    #[error("inning column {inning} has {outs} outs, 3 are needed to complete it")]
    InningNotEligible { inning: usize, outs: u32 },

    #[error("inning column {0} is complete")]
    InningComplete(usize),

    #[error("row {row}, inning column {inning} is outside the scorebook ({rows} rows, {innings} innings)")]
    CoordinateOutOfRange {
        row: usize,
        inning: usize,
        rows: usize,
        innings: usize,
    },
}
