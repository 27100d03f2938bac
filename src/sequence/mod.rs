//! Sequence container for the sorting visualizer
//!
//! This module provides the core data abstractions:
//! - [`SequenceState`]: the guarded, mutable list being sorted plus the
//!   derived bounds used by the renderer for bar scaling
//! - [`generate`]: deterministic random starting-list generation
//!
//! # Ownership
//!
//! [`SequenceState`] is owned by the animation controller. During a run the
//! active step engine is the only mutator, and the only mutation it is given
//! is [`SequenceState::swap`] - an adjacent-element permutation - so the
//! bounds recorded at set-time stay valid for the run's whole lifetime.

pub mod generate;

use crate::engine::errors::EngineError;

/// The mutable sequence being sorted, with bounds derived at set-time
#[derive(Debug, Clone, Default)]
pub struct SequenceState {
    /// Working values; length is fixed once set
    values: Vec<i32>,

    /// Smallest value in the sequence, recorded when the list was set
    min_val: i32,

    /// Largest value in the sequence, recorded when the list was set
    max_val: i32,
}

impl SequenceState {
    /// Create a sequence from a starting list
    pub fn new(values: Vec<i32>) -> Result<Self, EngineError> {
        let (min_val, max_val) = bounds(&values)?;
        Ok(SequenceState {
            values,
            min_val,
            max_val,
        })
    }

    /// Replace the working sequence and recompute the bounds.
    ///
    /// Fails with [`EngineError::InvalidInput`] on an empty list, leaving the
    /// existing sequence untouched.
    pub fn initialize(&mut self, values: Vec<i32>) -> Result<(), EngineError> {
        let (min_val, max_val) = bounds(&values)?;
        self.values = values;
        self.min_val = min_val;
        self.max_val = max_val;
        Ok(())
    }

    /// Read-only view of the current values, for rendering and tests
    pub fn snapshot(&self) -> &[i32] {
        &self.values
    }

    /// Read a single value
    pub fn get(&self, index: usize) -> i32 {
        self.values[index]
    }

    /// Swap two elements.
    ///
    /// This is the only mutation the step engines perform, so every
    /// intermediate state is a permutation of the starting list.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.values.swap(a, b);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest value at set-time (lower bound for bar scaling)
    pub fn min_val(&self) -> i32 {
        self.min_val
    }

    /// Largest value at set-time (upper bound for bar scaling)
    pub fn max_val(&self) -> i32 {
        self.max_val
    }
}

/// Compute (min, max) of a starting list, rejecting empty input
fn bounds(values: &[i32]) -> Result<(i32, i32), EngineError> {
    let mut iter = values.iter().copied();
    let first = iter.next().ok_or_else(|| EngineError::InvalidInput {
        message: "sequence must contain at least one value".to_string(),
    })?;

    let mut min_val = first;
    let mut max_val = first;
    for v in iter {
        min_val = min_val.min(v);
        max_val = max_val.max(v);
    }
    Ok((min_val, max_val))
}
