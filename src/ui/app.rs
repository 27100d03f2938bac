//! Main TUI application state and logic

use crate::controller::AnimationController;
use crate::engine::{AlgorithmKind, HighlightRole, SortOrder};
use crate::sequence::generate::ListGenerator;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use rustc_hash::FxHashMap;
use std::io;
use std::time::{Duration, Instant};

/// Shape of the random lists generated on reset
#[derive(Debug, Clone, Copy)]
pub struct ListConfig {
    pub count: usize,
    pub min_val: i32,
    pub max_val: i32,
}

/// The main application state
pub struct App {
    /// Drives the active sorting run
    pub controller: AnimationController,

    /// Random list generator used by reset
    generator: ListGenerator,

    /// Size and value range for generated lists
    config: ListConfig,

    /// Highlight map from the most recent mutating tick
    last_highlights: FxHashMap<usize, HighlightRole>,

    /// Mutating ticks taken in the current/most recent run
    swaps: usize,

    /// Status message to display
    status_message: String,

    /// Whether the app should quit
    should_quit: bool,

    /// Time between animation ticks while a run is active
    tick_interval: Duration,

    /// Last time the animation was advanced
    last_tick: Instant,
}

impl App {
    /// Create a new app around an initialized controller
    pub fn new(controller: AnimationController, generator: ListGenerator, config: ListConfig) -> Self {
        App {
            controller,
            generator,
            config,
            last_highlights: FxHashMap::default(),
            swaps: 0,
            status_message: String::from("Ready!"),
            should_quit: false,
            tick_interval: Duration::from_millis(200),
            last_tick: Instant::now(),
        }
    }

    /// Run the TUI event loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.controller.is_running() && self.last_tick.elapsed() >= self.tick_interval {
                self.advance_animation();
                self.last_tick = Instant::now();
            }

            // Poll with a timeout so the animation keeps moving between keys
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Take one animation step and fold the result into the display state
    fn advance_animation(&mut self) {
        match self.controller.tick() {
            Ok(Some(step)) => {
                if step.done {
                    self.last_highlights.clear();
                    self.status_message = format!("Sorted in {} swaps", self.swaps);
                } else {
                    self.swaps += 1;
                    self.last_highlights = step.highlighted;
                }
            }
            Ok(None) => {}
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    /// Render the UI: header on top, bars in the middle, status bar below
    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        super::panes::render_header_pane(
            frame,
            chunks[0],
            self.controller.algorithm(),
            self.controller.order(),
        );

        super::panes::render_bars_pane(
            frame,
            chunks[1],
            self.controller.sequence(),
            &self.last_highlights,
        );

        super::panes::render_status_bar(
            frame,
            chunks[2],
            &self.status_message,
            self.swaps,
            self.controller.is_running(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.regenerate();
            }
            KeyCode::Char(' ') => {
                self.start_sorting();
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                self.select_order(SortOrder::Ascending);
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                self.select_order(SortOrder::Descending);
            }
            KeyCode::Char('b') | KeyCode::Char('B') => {
                self.select_algorithm(AlgorithmKind::Bubble);
            }
            KeyCode::Char('i') | KeyCode::Char('I') => {
                self.select_algorithm(AlgorithmKind::Insertion);
            }
            _ => {}
        }
    }

    /// Start a run with the current algorithm and order
    fn start_sorting(&mut self) {
        if self.controller.is_running() {
            return;
        }
        match self.controller.start() {
            Ok(()) => {
                self.swaps = 0;
                self.last_highlights.clear();
                self.status_message = String::from("Sorting...");
                // Fire the first tick immediately rather than waiting a
                // full interval
                self.last_tick = Instant::now()
                    .checked_sub(self.tick_interval)
                    .unwrap_or_else(Instant::now);
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    /// Replace the sequence with a fresh random list, stopping any run
    fn regenerate(&mut self) {
        let values =
            self.generator
                .starting_list(self.config.count, self.config.min_val, self.config.max_val);
        match self.controller.reset(values) {
            Ok(()) => {
                self.swaps = 0;
                self.last_highlights.clear();
                self.status_message = String::from("New list generated");
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    /// Switch order for the next run; refused while sorting
    fn select_order(&mut self, order: SortOrder) {
        if self.controller.is_running() {
            self.status_message = String::from("Cannot change order while sorting");
            return;
        }
        self.controller.set_order(order);
        self.status_message = format!("Order: {}", order.label());
    }

    /// Switch algorithm for the next run; refused while sorting
    fn select_algorithm(&mut self, algorithm: AlgorithmKind) {
        if self.controller.is_running() {
            self.status_message = String::from("Cannot change algorithm while sorting");
            return;
        }
        self.controller.set_algorithm(algorithm);
        self.status_message = format!("Algorithm: {}", algorithm.label());
    }
}
