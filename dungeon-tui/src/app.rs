//! Application state: the session plus the scrolling event log.

use dungeon_core::{
    CombatAction, Direction, GameSession, MoveOutcome, SessionConfig, SessionError,
};

/// TUI state. All rules live in the session; the app only records what
/// happened for display.
pub struct App {
    pub session: GameSession,
    pub log: Vec<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: SessionConfig) -> Self {
        let mut app = Self {
            session: GameSession::new(config),
            log: Vec::new(),
            should_quit: false,
        };
        app.push(format!(
            "Welcome, {}! Descend through {} floors.",
            app.session.player().name,
            app.session.dungeon().total_floors()
        ));
        app
    }

    fn push(&mut self, line: impl Into<String>) {
        self.log.push(line.into());
    }

    pub fn move_player(&mut self, direction: Direction) {
        match self.session.move_player(direction) {
            Ok(MoveOutcome::Moved) => {}
            Ok(MoveOutcome::Blocked) => self.push("A monster blocks your way."),
            Ok(MoveOutcome::CannotRetreat) => self.push("You cannot go back."),
            Ok(MoveOutcome::NewFloor) => {
                let floor = self.session.position().floor + 1;
                self.push(format!("You descend to floor {floor}."));
            }
            Ok(MoveOutcome::DungeonComplete) => {
                self.push("You have cleared the dungeon. Victory!");
            }
            Err(err) => self.report(err),
        }
    }

    pub fn inspect(&mut self) {
        match self.session.inspect_current_room() {
            Ok(Some(item)) => self.push(format!("You found: {item}")),
            Ok(None) => self.push("Nothing of interest here."),
            Err(err) => self.report(err),
        }
    }

    pub fn combat(&mut self, action: CombatAction) {
        match self.session.combat_action(action) {
            Ok(outcome) => {
                for effect in &outcome.effects {
                    self.log.push(effect.to_string());
                }
            }
            Err(err) => self.report(err),
        }
    }

    pub fn drink(&mut self, slot: usize) {
        match self.session.use_potion(slot) {
            Ok(healed) => self.push(format!("You feel better: +{healed} health.")),
            Err(err) => self.report(err),
        }
    }

    fn report(&mut self, err: SessionError) {
        self.push(err.to_string());
    }
}
