//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, animation cadence
//! - **[`panes`]** — stateless render functions for each visible pane
//!   (header, bars, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with an
//! [`AnimationController`] and a [`ListGenerator`], then call [`App::run`]
//! to start the event loop.
//!
//! [`AnimationController`]: crate::controller::AnimationController
//! [`ListGenerator`]: crate::sequence::generate::ListGenerator
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::{App, ListConfig};
