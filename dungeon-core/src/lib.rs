//! Turn-based dungeon crawler game engine.
//!
//! This crate holds the whole game-state model and its transition rules:
//! entities, room and floor generation, navigation, and combat. It has no
//! presentation of its own; the `dungeon-cli` and `dungeon-tui` crates are
//! thin adapters over [`GameSession`].
//!
//! # Quick Start
//!
//! ```
//! use dungeon_core::{CombatAction, Direction, GameSession, SessionConfig};
//!
//! let config = SessionConfig::new("Thorin").with_seed(42);
//! let mut session = GameSession::new(config);
//!
//! let room = session.current_room().unwrap();
//! println!("{room}");
//!
//! if session.in_combat() {
//!     let outcome = session.combat_action(CombatAction::Attack).unwrap();
//!     for effect in &outcome.effects {
//!         println!("{effect}");
//!     }
//! } else {
//!     session.move_player(Direction::Forward).unwrap();
//! }
//! ```

pub mod combat;
pub mod dungeon;
pub mod entity;
pub mod items;
pub mod nav;
pub mod room;
pub mod session;
pub mod testing;

// Primary public API
pub use combat::{CombatAction, CombatOutcome, Effect, EncounterState};
pub use dungeon::{Dungeon, Position};
pub use entity::{Item, Monster, Player, Potion, Weapon};
pub use nav::{Direction, MoveOutcome};
pub use room::{MonsterView, Room, RoomView};
pub use session::{GameSession, SessionConfig, SessionError};
