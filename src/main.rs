// sortty: terminal sorting algorithm visualizer

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use sortty::controller::AnimationController;
use sortty::sequence::generate::ListGenerator;
use sortty::ui::{App, ListConfig};

fn usage(program_name: &str) -> ! {
    eprintln!("Usage: {} [count] [min] [max] [seed]", program_name);
    eprintln!();
    eprintln!("  count  number of bars to sort (default 40, at least 1)");
    eprintln!("  min    smallest generated value (default 0)");
    eprintln!("  max    largest generated value (default 100, at least min)");
    eprintln!("  seed   RNG seed for a reproducible starting list");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {}                # 40 bars in 0..=100", program_name);
    eprintln!("  {} 80 10 500      # 80 bars in 10..=500", program_name);
    eprintln!("  {} 40 0 100 42    # fixed seed, same list every run", program_name);
    std::process::exit(1);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("sortty");

    let mut count: usize = 40;
    let mut min_val: i32 = 0;
    let mut max_val: i32 = 100;
    let mut seed: Option<u64> = None;

    if let Some(arg) = args.get(1) {
        match arg.parse() {
            Ok(v) => count = v,
            Err(_) => usage(program_name),
        }
    }
    if let Some(arg) = args.get(2) {
        match arg.parse() {
            Ok(v) => min_val = v,
            Err(_) => usage(program_name),
        }
    }
    if let Some(arg) = args.get(3) {
        match arg.parse() {
            Ok(v) => max_val = v,
            Err(_) => usage(program_name),
        }
    }
    if let Some(arg) = args.get(4) {
        match arg.parse() {
            Ok(v) => seed = Some(v),
            Err(_) => usage(program_name),
        }
    }

    if count == 0 || min_val > max_val {
        eprintln!("Error: count must be at least 1 and min must not exceed max");
        eprintln!();
        usage(program_name);
    }

    // Generate the starting list
    let mut generator = match seed {
        Some(seed) => ListGenerator::new(seed),
        None => ListGenerator::from_entropy(),
    };
    let values = generator.starting_list(count, min_val, max_val);

    let controller = match AnimationController::new(values) {
        Ok(controller) => controller,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let config = ListConfig {
        count,
        min_val,
        max_val,
    };
    let mut app = App::new(controller, generator, config);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
