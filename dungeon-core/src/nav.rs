//! Navigation between rooms and floors, and room inspection.

use crate::dungeon::Dungeon;
use crate::entity::{Item, Player};
use crate::room::Room;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Which way the player moves through a floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

/// Result of a move attempt. Only `DungeonComplete` is terminal; everything
/// else leaves the session playable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Moved one room within the current floor.
    Moved,
    /// A live monster holds this room; nothing changed.
    Blocked,
    /// Already at the first room of the floor; nothing changed.
    CannotRetreat,
    /// Crossed onto the next floor, generating it if needed.
    NewFloor,
    /// Crossed past the last floor. The dungeon is cleared.
    DungeonComplete,
}

/// Try to move the player one room.
///
/// A live monster in the current room blocks all movement. Moving forward
/// off the end of a floor lands on room 0 of the next floor, lazily
/// generating it; off the end of the last floor the dungeon is complete.
/// Moving backward from room 0 is refused.
pub fn move_player<R: Rng>(
    dungeon: &mut Dungeon,
    direction: Direction,
    rng: &mut R,
) -> MoveOutcome {
    if dungeon
        .current_room()
        .is_some_and(|room| room.has_live_monster())
    {
        return MoveOutcome::Blocked;
    }

    let rooms_per_floor = dungeon.rooms_per_floor();
    let total_floors = dungeon.total_floors();
    let position = dungeon.position_mut();

    match direction {
        Direction::Backward => {
            if position.room == 0 {
                MoveOutcome::CannotRetreat
            } else {
                position.room -= 1;
                MoveOutcome::Moved
            }
        }
        Direction::Forward => {
            if position.room + 1 < rooms_per_floor {
                position.room += 1;
                MoveOutcome::Moved
            } else {
                position.room = 0;
                position.floor += 1;
                let floor = position.floor;
                if floor < total_floors {
                    dungeon.ensure_floor(floor, rng);
                    MoveOutcome::NewFloor
                } else {
                    MoveOutcome::DungeonComplete
                }
            }
        }
    }
}

/// Inspect a room: transfer its item, if any, into the player's inventory.
///
/// Returns a copy of what was found. A second inspection finds nothing.
pub fn inspect(room: &mut Room, player: &mut Player) -> Option<Item> {
    let item = room.item.take()?;
    player.inventory.push(item.clone());
    Some(item)
}
