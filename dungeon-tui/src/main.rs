//! Dungeon crawler TUI.
//!
//! An event-driven widget interface over `dungeon-core`: panels for the
//! current room, player status, and the event log, with single-key commands
//! on a hotkey bar. No game logic lives here.

mod app;
mod events;
mod ui;

use std::io::{self, stdout};
use std::time::Duration;

use crossterm::{
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dungeon_core::SessionConfig;
use ratatui::{backend::CrosstermBackend, Terminal};

use app::App;
use events::{handle_event, EventResult};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    let mut config = SessionConfig::new(
        flag_value(&args, "--name").unwrap_or_else(|| "Adventurer".to_string()),
    );
    if let Some(seed) = flag_value(&args, "--seed").and_then(|s| s.parse().ok()) {
        config = config.with_seed(seed);
    }

    let mut app = App::new(config);

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(Duration::from_millis(200))? {
            if handle_event(app, event::read()?) == EventResult::Quit {
                break;
            }
        }
        if app.should_quit {
            break;
        }
    }
    Ok(())
}

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn print_help() {
    println!("dungeon-tui - widget interface for the dungeon crawler");
    println!();
    println!("Flags: --name NAME, --seed SEED");
    println!();
    println!("Keys: f forward, b back, i inspect, a attack, c cast,");
    println!("      r flee, 1-9 drink potion in that slot, q quit");
}
