//! Bubble sort as a resumable state machine
//!
//! The classic two-level loop is flattened into stored indices: `pass` is
//! the outer pass counter and `cursor` the inner comparison position. Each
//! `advance` scans forward from the stored position until it finds an
//! out-of-order adjacent pair, swaps it, and suspends. In-order pairs are
//! consumed inside the same call.

use crate::engine::{EngineError, Phase, SortOrder, StepEngine, StepResult};
use crate::sequence::SequenceState;

/// Resumable adjacent-pair bubble sort
pub struct BubbleSort {
    order: SortOrder,

    /// Outer pass index, `0..n-1`
    pass: usize,

    /// Inner comparison index within the current pass, `0..n-1-pass`
    cursor: usize,

    phase: Phase,
}

impl BubbleSort {
    pub fn new(order: SortOrder) -> Self {
        BubbleSort {
            order,
            pass: 0,
            cursor: 0,
            phase: Phase::Running,
        }
    }
}

impl StepEngine for BubbleSort {
    fn advance(&mut self, seq: &mut SequenceState) -> Result<StepResult, EngineError> {
        if self.phase != Phase::Running {
            return Err(EngineError::Exhausted);
        }

        let n = seq.len();
        while self.pass + 1 < n {
            // Each pass compares pairs (j, j+1) for j in 0..n-1-pass; the
            // tail of the list is already in place after earlier passes.
            if self.cursor + 1 < n - self.pass {
                let j = self.cursor;
                self.cursor += 1;

                if self.order.out_of_order(seq.get(j), seq.get(j + 1)) {
                    seq.swap(j, j + 1);
                    return Ok(StepResult::swapped(j, j + 1));
                }
            } else {
                self.cursor = 0;
                self.pass += 1;
            }
        }

        self.phase = Phase::Complete;
        Ok(StepResult::complete())
    }

    fn abort(&mut self) {
        self.phase = Phase::Aborted;
    }
}
