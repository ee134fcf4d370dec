//! GameSession - the primary public API for a dungeon run.
//!
//! A session owns the player, the dungeon, and the random source, and
//! exposes every operation a presentation layer needs: moving, inspecting,
//! fighting, drinking potions, and querying state. Recoverable conditions
//! (a blocked move, insufficient mana) come back as ordinary result values;
//! only player death and dungeon completion end the session, after which
//! every mutating call returns [`SessionError::SessionOver`].

use crate::combat::{self, CombatAction, CombatOutcome, Effect, EncounterState};
use crate::dungeon::{Dungeon, Position, DEFAULT_ROOMS_PER_FLOOR, DEFAULT_TOTAL_FLOORS};
use crate::entity::{Item, Player};
use crate::nav::{self, Direction, MoveOutcome};
use crate::room::RoomView;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

/// Experience awarded for a kill on floor `level` (0-based).
fn kill_experience(level: usize) -> u32 {
    10 * (level as u32 + 1)
}

/// Errors from session operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The player died or cleared the dungeon; the session is spent.
    #[error("the session has ended")]
    SessionOver,

    /// A combat action was issued with no live monster in the room.
    #[error("there is no monster here to fight")]
    NoMonster,

    /// `use_potion` with an out-of-range inventory slot.
    #[error("no item in inventory slot {0}")]
    NoSuchItem(usize),

    /// `use_potion` pointed at something that is not a potion.
    #[error("{0} is not drinkable")]
    NotAPotion(String),
}

/// Configuration for creating a new session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Player character name.
    pub player_name: String,

    /// Number of floors to descend.
    pub total_floors: usize,

    /// Rooms on each floor.
    pub rooms_per_floor: usize,

    /// Seed for the random source. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Create a config with the default dungeon shape.
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            total_floors: DEFAULT_TOTAL_FLOORS,
            rooms_per_floor: DEFAULT_ROOMS_PER_FLOOR,
            seed: None,
        }
    }

    /// Set the number of floors.
    pub fn with_total_floors(mut self, floors: usize) -> Self {
        self.total_floors = floors;
        self
    }

    /// Set the rooms per floor.
    pub fn with_rooms_per_floor(mut self, rooms: usize) -> Self {
        self.rooms_per_floor = rooms;
        self
    }

    /// Seed the random source for a deterministic run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// One player's run through the dungeon, from start to completion or death.
pub struct GameSession {
    player: Player,
    dungeon: Dungeon,
    rng: StdRng,
    player_dead: bool,
}

impl GameSession {
    /// Start a session: create the player and generate the first floor.
    pub fn new(config: SessionConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let dungeon = Dungeon::new(config.total_floors, config.rooms_per_floor, &mut rng);
        info!(
            "session started: {} ({} floors x {} rooms)",
            config.player_name, config.total_floors, config.rooms_per_floor
        );
        Self {
            player: Player::new(config.player_name),
            dungeon,
            rng,
            player_dead: false,
        }
    }

    /// Assemble a session from parts. Test support.
    pub(crate) fn from_parts(player: Player, dungeon: Dungeon, rng: StdRng) -> Self {
        Self {
            player,
            dungeon,
            rng,
            player_dead: false,
        }
    }

    fn ensure_active(&self) -> Result<(), SessionError> {
        if self.player_dead || self.dungeon.is_complete() {
            Err(SessionError::SessionOver)
        } else {
            Ok(())
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Snapshot of the room the player stands in.
    pub fn current_room(&self) -> Result<RoomView, SessionError> {
        self.ensure_active()?;
        self.dungeon
            .current_room()
            .map(|room| room.view())
            .ok_or(SessionError::SessionOver)
    }

    /// The player: health, mana, level, experience, inventory.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Current (floor, room) position.
    pub fn position(&self) -> Position {
        self.dungeon.position()
    }

    /// The dungeon structure, read-only.
    pub fn dungeon(&self) -> &Dungeon {
        &self.dungeon
    }

    /// True while the current room holds a live monster.
    pub fn in_combat(&self) -> bool {
        self.dungeon
            .current_room()
            .is_some_and(|room| room.has_live_monster())
    }

    /// True once every floor has been crossed.
    pub fn is_complete(&self) -> bool {
        self.dungeon.is_complete()
    }

    /// True once the session has reached any terminal state.
    pub fn is_over(&self) -> bool {
        self.player_dead || self.dungeon.is_complete()
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Try to move one room in `direction`.
    pub fn move_player(&mut self, direction: Direction) -> Result<MoveOutcome, SessionError> {
        self.ensure_active()?;
        let outcome = nav::move_player(&mut self.dungeon, direction, &mut self.rng);
        debug!("move {:?} -> {:?} at {:?}", direction, outcome, self.dungeon.position());
        Ok(outcome)
    }

    /// Search the current room, pocketing its item if one remains.
    pub fn inspect_current_room(&mut self) -> Result<Option<Item>, SessionError> {
        self.ensure_active()?;
        let room = self
            .dungeon
            .current_room_mut()
            .ok_or(SessionError::SessionOver)?;
        Ok(nav::inspect(room, &mut self.player))
    }

    /// Resolve one combat turn against the monster in the current room.
    ///
    /// On victory the monster is cleared from the room and experience is
    /// awarded (any level-up shows up in the effect log). On defeat the
    /// session becomes unusable.
    pub fn combat_action(&mut self, action: CombatAction) -> Result<CombatOutcome, SessionError> {
        self.ensure_active()?;
        let room = self
            .dungeon
            .current_room_mut()
            .ok_or(SessionError::SessionOver)?;
        let Some(monster) = room.monster.as_mut().filter(|m| !m.is_dead()) else {
            return Err(SessionError::NoMonster);
        };

        let mut outcome = combat::resolve_turn(&mut self.player, monster, action);
        match outcome.state {
            EncounterState::Victory => {
                let level = room.level;
                room.monster = None;
                let amount = kill_experience(level);
                outcome.effects.push(Effect::ExperienceGained { amount });
                if let Some(up) = self.player.add_experience(amount) {
                    outcome.effects.push(Effect::LeveledUp {
                        new_level: up.new_level,
                    });
                }
            }
            EncounterState::Defeated => {
                info!("player {} has died", self.player.name);
                self.player_dead = true;
            }
            EncounterState::Fled | EncounterState::Ongoing => {}
        }
        Ok(outcome)
    }

    /// Drink the potion at inventory slot `index`, consuming it.
    ///
    /// Returns the health actually restored.
    pub fn use_potion(&mut self, index: usize) -> Result<i32, SessionError> {
        self.ensure_active()?;
        match self.player.inventory.get(index) {
            Some(Item::Potion(potion)) => {
                let amount = potion.heal_amount;
                self.player.inventory.remove(index);
                Ok(self.player.health.heal(amount))
            }
            Some(Item::Weapon(weapon)) => Err(SessionError::NotAPotion(weapon.name.clone())),
            None => Err(SessionError::NoSuchItem(index)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = SessionConfig::new("Thorin")
            .with_total_floors(3)
            .with_rooms_per_floor(4)
            .with_seed(7);

        assert_eq!(config.player_name, "Thorin");
        assert_eq!(config.total_floors, 3);
        assert_eq!(config.rooms_per_floor, 4);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn new_session_starts_at_the_first_room() {
        let session = GameSession::new(SessionConfig::new("Thorin").with_seed(1));
        assert_eq!(session.position(), Position { floor: 0, room: 0 });
        assert_eq!(session.player().name, "Thorin");
        assert!(!session.is_over());
        assert_eq!(session.dungeon().generated_floors(), 1);
    }

    #[test]
    fn seeded_sessions_agree() {
        let a = GameSession::new(SessionConfig::new("A").with_seed(42));
        let b = GameSession::new(SessionConfig::new("B").with_seed(42));
        let room_a = a.current_room().unwrap();
        let room_b = b.current_room().unwrap();
        assert_eq!(room_a.monster.is_some(), room_b.monster.is_some());
        assert_eq!(room_a.item, room_b.item);
    }
}
