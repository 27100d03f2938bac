//! TUI pane rendering modules
//!
//! This module provides the rendering logic for the visible panes,
//! organized by responsibility:
//!
//! - [`header`]: centered title (algorithm + order) and key-binding hints
//! - [`bars`]: the sequence drawn as vertical bars with mutation highlights
//! - [`status`]: one-line status bar with message, swap count, and run state
//!
//! Each pane module exports a single stateless `render_*` function that
//! takes a [`Frame`](ratatui::Frame), its target area, and the data it
//! displays. All colors come from [`theme`](crate::ui::theme).

pub mod bars;
pub mod header;
pub mod status;

pub use bars::render_bars_pane;
pub use header::render_header_pane;
pub use status::render_status_bar;
