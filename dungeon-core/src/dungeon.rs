//! The dungeon: an ordered sequence of floors, generated lazily.

use crate::room::Room;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Floors in a default dungeon.
pub const DEFAULT_TOTAL_FLOORS: usize = 5;

/// Rooms on each floor of a default dungeon.
pub const DEFAULT_ROOMS_PER_FLOOR: usize = 5;

/// Where the player currently stands.
///
/// Invariants: `room < rooms_per_floor`, `floor <= total_floors`, and
/// `floor == total_floors` means the dungeon has been cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub floor: usize,
    pub room: usize,
}

/// An ordered sequence of floors, each an ordered sequence of rooms.
///
/// Floor `n` is generated the first time the player sets foot on it, and
/// exactly once: re-entering an already generated floor is a no-op.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dungeon {
    total_floors: usize,
    rooms_per_floor: usize,
    floors: Vec<Vec<Room>>,
    position: Position,
}

impl Dungeon {
    /// Create a dungeon and generate its first floor.
    pub fn new<R: Rng>(total_floors: usize, rooms_per_floor: usize, rng: &mut R) -> Self {
        let mut dungeon = Self {
            total_floors,
            rooms_per_floor,
            floors: Vec::new(),
            position: Position { floor: 0, room: 0 },
        };
        dungeon.ensure_floor(0, rng);
        dungeon
    }

    /// Handcrafted dungeon for tests: the given rooms form floor 0.
    pub(crate) fn from_first_floor(
        total_floors: usize,
        rooms_per_floor: usize,
        first_floor: Vec<Room>,
    ) -> Self {
        Self {
            total_floors,
            rooms_per_floor,
            floors: vec![first_floor],
            position: Position { floor: 0, room: 0 },
        }
    }

    /// Generate one floor's worth of rooms. Pure in its inputs plus the RNG.
    pub fn generate_floor<R: Rng>(
        floor_number: usize,
        rooms_per_floor: usize,
        rng: &mut R,
    ) -> Vec<Room> {
        (0..rooms_per_floor)
            .map(|i| {
                Room::generate(
                    format!("Room {}, floor {}", i + 1, floor_number + 1),
                    floor_number,
                    rng,
                )
            })
            .collect()
    }

    /// Generate `floor` if it does not exist yet. Idempotent.
    ///
    /// Floors are only ever generated in order, so anything other than the
    /// next missing floor is ignored.
    pub(crate) fn ensure_floor<R: Rng>(&mut self, floor: usize, rng: &mut R) {
        if floor >= self.total_floors || floor != self.floors.len() {
            return;
        }
        debug!("generating floor {}", floor + 1);
        let rooms = Self::generate_floor(floor, self.rooms_per_floor, rng);
        self.floors.push(rooms);
    }

    /// The room the player stands in, or `None` once the dungeon is cleared.
    pub fn current_room(&self) -> Option<&Room> {
        self.floors.get(self.position.floor)?.get(self.position.room)
    }

    pub(crate) fn current_room_mut(&mut self) -> Option<&mut Room> {
        self.floors
            .get_mut(self.position.floor)?
            .get_mut(self.position.room)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub(crate) fn position_mut(&mut self) -> &mut Position {
        &mut self.position
    }

    pub fn total_floors(&self) -> usize {
        self.total_floors
    }

    pub fn rooms_per_floor(&self) -> usize {
        self.rooms_per_floor
    }

    /// How many floors have been generated so far.
    pub fn generated_floors(&self) -> usize {
        self.floors.len()
    }

    /// True once the player has crossed past the last floor.
    pub fn is_complete(&self) -> bool {
        self.position.floor >= self.total_floors
    }
}
