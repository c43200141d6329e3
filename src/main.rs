// sortty: terminal bubble-sort visualizer

mod input;
mod sort;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use input::DEFAULT_SIZE;
use ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional positional argument: initial bar count
    let args: Vec<String> = std::env::args().collect();

    let initial_size = match args.get(1) {
        None => DEFAULT_SIZE,
        Some(arg) => match arg.parse::<usize>() {
            Ok(n) => n.clamp(2, 60),
            Err(_) => {
                let program_name = args.first().map(|s| s.as_str()).unwrap_or("sortty");
                eprintln!("Error: invalid size '{}'", arg);
                eprintln!();
                eprintln!("Usage: {} [size]", program_name);
                eprintln!();
                eprintln!("Examples:");
                eprintln!("  {}          # start with {} random bars", program_name, DEFAULT_SIZE);
                eprintln!("  {} 30       # start with 30 random bars", program_name);
                std::process::exit(1);
            }
        },
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(initial_size);
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
