//! Room generation and read-only room snapshots.

use crate::entity::{Item, Monster};
use crate::items;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An atomic location holding at most one monster and one item.
///
/// Presence of both is decided once at creation; defeating the monster or
/// collecting the item clears the corresponding slot for good.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub description: String,
    /// Floor this room belongs to (0-based).
    pub level: usize,
    pub monster: Option<Monster>,
    pub item: Option<Item>,
}

impl Room {
    /// Generate a room: a goblin with probability 1/2, and an item drawn
    /// uniformly from {nothing, weapon, potion}. No other side effects.
    pub fn generate<R: Rng>(description: impl Into<String>, level: usize, rng: &mut R) -> Self {
        let monster = if rng.gen_bool(0.5) {
            Some(Monster::goblin(rng))
        } else {
            None
        };
        Self {
            description: description.into(),
            level,
            monster,
            item: items::roll_room_item(rng),
        }
    }

    /// An empty room, for handcrafted dungeons.
    pub fn empty(description: impl Into<String>, level: usize) -> Self {
        Self {
            description: description.into(),
            level,
            monster: None,
            item: None,
        }
    }

    pub fn has_live_monster(&self) -> bool {
        self.monster.as_ref().is_some_and(|m| !m.is_dead())
    }

    /// Snapshot for presentation layers.
    pub fn view(&self) -> RoomView {
        RoomView {
            description: self.description.clone(),
            level: self.level,
            monster: self.monster.as_ref().map(|m| MonsterView {
                name: m.name.clone(),
                damage: m.damage,
                health: m.health,
            }),
            item: self.item.as_ref().map(|i| i.to_string()),
        }
    }
}

/// Read-only view of a room, safe to hand to any presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomView {
    pub description: String,
    pub level: usize,
    pub monster: Option<MonsterView>,
    pub item: Option<String>,
}

/// Monster stats as seen from outside the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterView {
    pub name: String,
    pub damage: i32,
    pub health: i32,
}

impl fmt::Display for RoomView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.", self.description)?;
        match &self.monster {
            Some(m) => write!(
                f,
                " A {} lurks here ({} damage, {} health)!",
                m.name, m.damage, m.health
            )?,
            None => write!(f, " All quiet.")?,
        }
        if let Some(item) = &self.item {
            write!(f, " Something glints on the floor: {item}.")?;
        }
        Ok(())
    }
}
