//! Outs per half-inning, summed straight from the cells.

use crate::book::TeamScorebook;
use crate::error::{Result, ScoringError};

pub const OUTS_PER_HALF_INNING: u32 = 3;

impl TeamScorebook {
    /// Every out recorded in the inning, uncapped. A double play credited to the third out can
    /// push this past 3.
    pub fn recorded_outs(&self, inning: usize) -> Result<u32> {
        self.column(inning)?;
        Ok(self
            .column_cells(inning)
            .map(|cell| cell.outs_contributed)
            .sum())
    }

    pub fn outs(&self, inning: usize) -> Result<u32> {
        Ok(self.recorded_outs(inning)?.min(OUTS_PER_HALF_INNING))
    }

    /// Outs through this row of the lineup, for the badge on the row's cell.
    pub fn running_outs(&self, row: usize, inning: usize) -> Result<u32> {
        self.cell(row, inning)?;
        let outs: u32 = self.book[..=row]
            .iter()
            .map(|cells| cells[inning].outs_contributed)
            .sum();
        Ok(outs.min(OUTS_PER_HALF_INNING))
    }

    pub fn can_complete(&self, inning: usize) -> Result<bool> {
        Ok(!self.column(inning)?.complete && self.outs(inning)? >= OUTS_PER_HALF_INNING)
    }

    pub(crate) fn check_eligible(&self, inning: usize) -> Result<()> {
        if self.column(inning)?.complete {
            return Err(ScoringError::InningComplete(inning));
        }
        let outs = self.recorded_outs(inning)?;
        if outs < OUTS_PER_HALF_INNING {
            return Err(ScoringError::InningNotEligible { inning, outs });
        }
        Ok(())
    }
}
