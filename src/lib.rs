//! # Introduction
//!
//! sortty animates comparison-based sorting algorithms as colored bars in
//! the terminal, one frame per algorithmic step, using a TUI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Event loop → AnimationController.tick() → StepEngine.advance()
//!            → mutates SequenceState → StepResult → bar renderer
//! ```
//!
//! 1. [`sequence`] — the guarded list being sorted, with derived min/max
//!    bounds for bar scaling, plus seeded random list generation.
//! 2. [`engine`] — resumable step engines: each `advance()` performs exactly
//!    one visible adjacent swap (or signals completion) and reports the
//!    touched indices with their roles.
//! 3. [`controller`] — ticks the active engine at the event loop's cadence
//!    and exposes start / reset / order / algorithm controls.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Algorithms
//!
//! Bubble sort and insertion sort, each in ascending or descending order.
//! Non-mutating comparisons are batched inside a single `advance()` call, so
//! every animation frame shows an actual change.

pub mod controller;
pub mod engine;
pub mod sequence;
pub mod ui;
