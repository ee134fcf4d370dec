//! Test support: deterministic sessions over handcrafted dungeons.
//!
//! Random generation makes it awkward to assert on exact combat numbers
//! from the public API alone, so these helpers let tests lay out floor 0 by
//! hand. Later floors are still generated lazily from the (seeded) random
//! source when the player crosses onto them.

use crate::dungeon::Dungeon;
use crate::entity::{Monster, Player};
use crate::room::Room;
use crate::session::GameSession;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A goblin with exact stats.
pub fn goblin(damage: i32, health: i32) -> Monster {
    Monster::new("Goblin", damage, health)
}

/// An empty room on floor `level`.
pub fn room(description: &str, level: usize) -> Room {
    Room::empty(description, level)
}

/// A session whose first floor is exactly `first_floor`.
///
/// The session RNG is seeded with `seed`, so floors generated past floor 0
/// are reproducible too.
pub fn session_with_rooms(
    player_name: &str,
    total_floors: usize,
    first_floor: Vec<Room>,
    seed: u64,
) -> GameSession {
    let rooms_per_floor = first_floor.len();
    let dungeon = Dungeon::from_first_floor(total_floors, rooms_per_floor, first_floor);
    GameSession::from_parts(
        Player::new(player_name),
        dungeon,
        StdRng::seed_from_u64(seed),
    )
}
