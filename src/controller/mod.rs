//! Animation controller
//!
//! Orchestrates one step engine at a time on behalf of the event loop: it
//! owns the [`SequenceState`], the run configuration (order + algorithm),
//! and an optional live engine, and exposes the small control surface the
//! UI drives - start, tick, reset, and configuration switches.
//!
//! # Mutation gate
//!
//! While `running` is true the live engine is the only mutator of the
//! sequence, and it only runs inside [`AnimationController::tick`]. The
//! configuration switches are silently ignored during a run so the engine's
//! order and algorithm stay fixed for its whole lifetime.

use crate::engine::{AlgorithmKind, EngineError, SortOrder, StepEngine, StepResult};
use crate::sequence::SequenceState;

/// Drives one sorting run at a time under external pacing
pub struct AnimationController {
    /// The sequence being sorted and rendered
    sequence: SequenceState,

    /// Sort direction for the next (or current) run
    order: SortOrder,

    /// Algorithm variant for the next (or current) run
    algorithm: AlgorithmKind,

    /// Live engine; `Some` exactly while `running`
    engine: Option<Box<dyn StepEngine>>,

    /// True between a successful `start()` and the `done` tick (or a reset)
    running: bool,
}

impl AnimationController {
    /// Create a controller over a starting list.
    ///
    /// Defaults to ascending bubble sort, matching the initial UI state.
    pub fn new(values: Vec<i32>) -> Result<Self, EngineError> {
        Ok(AnimationController {
            sequence: SequenceState::new(values)?,
            order: SortOrder::Ascending,
            algorithm: AlgorithmKind::Bubble,
            engine: None,
            running: false,
        })
    }

    /// Begin a run with the current algorithm and order.
    ///
    /// No-op while a run is already active. Fails with
    /// [`EngineError::EmptySequence`] when there is nothing to sort.
    pub fn start(&mut self) -> Result<(), EngineError> {
        if self.running {
            return Ok(());
        }
        if self.sequence.is_empty() {
            return Err(EngineError::EmptySequence);
        }

        self.engine = Some(self.algorithm.build(self.order));
        self.running = true;
        Ok(())
    }

    /// Advance the active run by one step.
    ///
    /// Returns `Ok(None)` when no run is active. On the `done` step the
    /// engine is dropped and `running` cleared, so the next `tick()` is
    /// `Ok(None)` rather than an error.
    pub fn tick(&mut self) -> Result<Option<StepResult>, EngineError> {
        if !self.running {
            return Ok(None);
        }
        let engine = self.engine.as_mut().ok_or(EngineError::Exhausted)?;

        let result = engine.advance(&mut self.sequence)?;
        if result.done {
            self.running = false;
            self.engine = None;
        }
        Ok(Some(result))
    }

    /// Switch the algorithm used by the next `start()`; ignored mid-run
    pub fn set_algorithm(&mut self, algorithm: AlgorithmKind) {
        if !self.running {
            self.algorithm = algorithm;
        }
    }

    /// Switch the order used by the next `start()`; ignored mid-run
    pub fn set_order(&mut self, order: SortOrder) {
        if !self.running {
            self.order = order;
        }
    }

    /// Abort any live run and install a fresh starting list.
    ///
    /// `running` is cleared unconditionally; on an empty `new_values` the
    /// previous sequence is preserved and [`EngineError::InvalidInput`] is
    /// returned.
    pub fn reset(&mut self, new_values: Vec<i32>) -> Result<(), EngineError> {
        if let Some(engine) = self.engine.as_mut() {
            engine.abort();
        }
        self.engine = None;
        self.running = false;
        self.sequence.initialize(new_values)
    }

    pub fn sequence(&self) -> &SequenceState {
        &self.sequence
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn algorithm(&self) -> AlgorithmKind {
        self.algorithm
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// An empty controller: no data until `reset()` installs a list.
///
/// `start()` on this state fails with [`EngineError::EmptySequence`].
impl Default for AnimationController {
    fn default() -> Self {
        AnimationController {
            sequence: SequenceState::default(),
            order: SortOrder::Ascending,
            algorithm: AlgorithmKind::Bubble,
            engine: None,
            running: false,
        }
    }
}
