//! Insertion sort as a resumable state machine
//!
//! The outer loop index is stored as `outer`; while an element is being
//! inserted, its cursor position and held value live in `hold`. Each
//! mutating step moves the held element one position toward the front via
//! an adjacent swap (equivalent to the textbook shift-then-write, since the
//! cursor slot always contains the held value). Elements already in place
//! are skipped silently inside the same `advance` call.

use crate::engine::{EngineError, HighlightRole, Phase, SortOrder, StepEngine, StepResult};
use crate::sequence::SequenceState;
use rustc_hash::FxHashMap;

/// Resumable insertion sort
pub struct InsertionSort {
    order: SortOrder,

    /// Next element to insert, `1..n`
    outer: usize,

    /// Mid-insertion cursor: (current slot of the held element, its value)
    hold: Option<(usize, i32)>,

    phase: Phase,
}

impl InsertionSort {
    pub fn new(order: SortOrder) -> Self {
        InsertionSort {
            order,
            outer: 1,
            hold: None,
            phase: Phase::Running,
        }
    }
}

impl StepEngine for InsertionSort {
    fn advance(&mut self, seq: &mut SequenceState) -> Result<StepResult, EngineError> {
        if self.phase != Phase::Running {
            return Err(EngineError::Exhausted);
        }

        let n = seq.len();
        loop {
            let (slot, current) = match self.hold {
                Some(hold) => hold,
                None => {
                    if self.outer >= n {
                        self.phase = Phase::Complete;
                        return Ok(StepResult::complete());
                    }
                    let hold = (self.outer, seq.get(self.outer));
                    self.hold = Some(hold);
                    hold
                }
            };

            if slot > 0 && self.order.out_of_order(seq.get(slot - 1), current) {
                seq.swap(slot - 1, slot);
                let dst = slot - 1;
                self.hold = Some((dst, current));

                let mut highlighted = FxHashMap::default();
                highlighted.insert(dst, HighlightRole::Placed);
                if dst > 0 {
                    // The neighbor the next comparison will look at
                    highlighted.insert(dst - 1, HighlightRole::Compared);
                }
                return Ok(StepResult {
                    highlighted,
                    done: false,
                });
            }

            // Held element has found its slot; move on to the next one
            self.hold = None;
            self.outer += 1;
        }
    }

    fn abort(&mut self) {
        self.phase = Phase::Aborted;
    }
}
