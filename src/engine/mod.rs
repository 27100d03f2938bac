//! Step-wise sorting execution engine
//!
//! This module provides the core execution logic:
//! - [`StepEngine`]: the suspension contract every algorithm variant
//!   implements
//! - [`bubble`]: bubble sort as a resumable state machine
//! - [`insertion`]: insertion sort as a resumable state machine
//! - [`errors`]: the error taxonomy
//!
//! # Execution Model
//!
//! An engine wraps exactly one algorithm run over one sequence and one
//! [`SortOrder`]. Each call to [`StepEngine::advance`] resumes the algorithm
//! from its stored loop indices, performs at most one externally visible
//! mutation (one adjacent swap), and returns a [`StepResult`] naming the
//! indices it touched. Comparisons that cause no mutation are consumed
//! silently inside the same call, so a `done == false` result always
//! corresponds to exactly one swap - never zero.
//!
//! The engine never blocks and never stores a reference to the sequence; the
//! caller passes `&mut SequenceState` on every tick and is responsible for
//! not mutating it between ticks.

pub mod bubble;
pub mod errors;
pub mod insertion;

pub use self::errors::EngineError;

use crate::sequence::SequenceState;
use crate::engine::bubble::BubbleSort;
use crate::engine::insertion::InsertionSort;
use rustc_hash::FxHashMap;

/// Sort direction, fixed for the duration of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// True when `a` must move past `b` to satisfy this order
    pub fn out_of_order(self, a: i32, b: i32) -> bool {
        match self {
            SortOrder::Ascending => a > b,
            SortOrder::Descending => a < b,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Ascending",
            SortOrder::Descending => "Descending",
        }
    }
}

/// Role of an index in the most recent mutation, for rendering emphasis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightRole {
    /// Source-like index: the element compared against / moved from
    Compared,

    /// Destination-like index: where the moved element landed
    Placed,
}

/// Outcome of one engine tick.
///
/// `highlighted` holds at most two entries and is a fresh map every tick -
/// the engine never reuses or retains it.
#[derive(Debug, Clone)]
pub struct StepResult {
    /// Indices touched by this tick's mutation, tagged with their role
    pub highlighted: FxHashMap<usize, HighlightRole>,

    /// True exactly once, on the tick that finds no work left
    pub done: bool,
}

impl StepResult {
    /// A mutating step touching `compared` and `placed`
    fn swapped(compared: usize, placed: usize) -> Self {
        let mut highlighted = FxHashMap::default();
        highlighted.insert(compared, HighlightRole::Compared);
        highlighted.insert(placed, HighlightRole::Placed);
        StepResult {
            highlighted,
            done: false,
        }
    }

    /// The terminal step: nothing highlighted, run over
    fn complete() -> Self {
        StepResult {
            highlighted: FxHashMap::default(),
            done: true,
        }
    }
}

/// Lifecycle of an engine's suspended state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Running,
    Complete,
    Aborted,
}

/// The suspension contract shared by all algorithm variants.
///
/// `advance` resumes the algorithm and performs at most one visible
/// mutation; `abort` discards progress. Once an engine has completed or been
/// aborted, further `advance` calls fail with [`EngineError::Exhausted`].
pub trait StepEngine {
    fn advance(&mut self, seq: &mut SequenceState) -> Result<StepResult, EngineError>;

    fn abort(&mut self);
}

/// Which algorithm the next run will use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    Bubble,
    Insertion,
}

impl AlgorithmKind {
    pub fn label(self) -> &'static str {
        match self {
            AlgorithmKind::Bubble => "Bubble Sort",
            AlgorithmKind::Insertion => "Insertion Sort",
        }
    }

    /// Construct a fresh engine for this algorithm
    pub fn build(self, order: SortOrder) -> Box<dyn StepEngine> {
        match self {
            AlgorithmKind::Bubble => Box::new(BubbleSort::new(order)),
            AlgorithmKind::Insertion => Box::new(InsertionSort::new(order)),
        }
    }
}
