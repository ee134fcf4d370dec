//! Key dispatch for the dungeon TUI.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use dungeon_core::{CombatAction, Direction};

use crate::app::App;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
}

/// Handle a terminal event.
pub fn handle_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
        _ => EventResult::Continue,
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return EventResult::Quit,
        KeyCode::Char('f') | KeyCode::Right => app.move_player(Direction::Forward),
        KeyCode::Char('b') | KeyCode::Left => app.move_player(Direction::Backward),
        KeyCode::Char('i') => app.inspect(),
        KeyCode::Char('a') => app.combat(CombatAction::Attack),
        KeyCode::Char('c') => app.combat(CombatAction::CastSpell),
        KeyCode::Char('r') => app.combat(CombatAction::Flee),
        KeyCode::Char(digit @ '1'..='9') => {
            // Hotkeys are 1-based inventory slots
            let slot = digit as usize - '1' as usize;
            app.drink(slot);
        }
        _ => {}
    }
    EventResult::Continue
}
