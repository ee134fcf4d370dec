//! Core entities: the player, monsters, and carried items.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hard cap on player health; healing never exceeds it.
pub const MAX_HEALTH: i32 = 100;

/// Mana a freshly created player starts with.
pub const STARTING_MANA: i32 = 50;

// ============================================================================
// Health
// ============================================================================

/// Health tracking with a fixed maximum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub maximum: i32,
}

impl Health {
    pub fn new(maximum: i32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    /// Apply damage and report whether it was lethal.
    ///
    /// Death is a result value, not a panic or an unwind: callers decide
    /// how to propagate `dropped_to_zero`.
    pub fn take_damage(&mut self, amount: i32) -> DamageResult {
        self.current -= amount;
        DamageResult {
            damage_taken: amount,
            dropped_to_zero: self.current <= 0,
        }
    }

    /// Heal up to the maximum. Returns the amount actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let old = self.current;
        self.current = (self.current + amount).min(self.maximum);
        self.current - old
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }

    pub fn ratio(&self) -> f32 {
        (self.current as f32 / self.maximum as f32).clamp(0.0, 1.0)
    }
}

/// Result of applying damage.
#[derive(Debug, Clone, Copy)]
pub struct DamageResult {
    pub damage_taken: i32,
    pub dropped_to_zero: bool,
}

// ============================================================================
// Items
// ============================================================================

/// A weapon. Inert in this engine: it sits in the inventory for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub damage: i32,
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (+{} damage)", self.name, self.damage)
    }
}

/// A healing potion. Single-use: drinking it removes it from the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Potion {
    pub name: String,
    pub heal_amount: i32,
}

impl fmt::Display for Potion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (+{} health)", self.name, self.heal_amount)
    }
}

/// Anything a room can hold and a player can carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Item {
    Weapon(Weapon),
    Potion(Potion),
}

impl Item {
    pub fn name(&self) -> &str {
        match self {
            Item::Weapon(w) => &w.name,
            Item::Potion(p) => &p.name,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Weapon(w) => w.fmt(f),
            Item::Potion(p) => p.fmt(f),
        }
    }
}

// ============================================================================
// Monster
// ============================================================================

/// A room's occupant. Damage is fixed at creation; health only goes down.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monster {
    pub name: String,
    pub damage: i32,
    pub health: i32,
}

impl Monster {
    pub fn new(name: impl Into<String>, damage: i32, health: i32) -> Self {
        Self {
            name: name.into(),
            damage,
            health,
        }
    }

    /// Roll up a goblin: damage in [5,15], health in [10,30].
    pub fn goblin<R: Rng>(rng: &mut R) -> Self {
        Self::new("Goblin", rng.gen_range(5..=15), rng.gen_range(10..=30))
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

impl fmt::Display for Monster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} damage, {} health)",
            self.name, self.damage, self.health
        )
    }
}

// ============================================================================
// Player
// ============================================================================

/// The player character. Owned by the session; mutated by combat and leveling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub health: Health,
    pub mana: i32,
    pub level: u32,
    pub experience: u32,
    pub inventory: Vec<Item>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: Health::new(MAX_HEALTH),
            mana: STARTING_MANA,
            level: 1,
            experience: 0,
            inventory: Vec::new(),
        }
    }

    /// Gain experience, leveling up at `level * 10`.
    ///
    /// The threshold is checked once per call against the pre-increment
    /// level, so a single gain produces at most one level-up even when it
    /// crosses several thresholds.
    pub fn add_experience(&mut self, amount: u32) -> Option<LevelUp> {
        self.experience += amount;
        if self.experience >= self.level * 10 {
            self.level += 1;
            self.health = Health::new(MAX_HEALTH);
            self.mana += 20;
            Some(LevelUp {
                new_level: self.level,
            })
        } else {
            None
        }
    }
}

/// A level gained from [`Player::add_experience`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub new_level: u32,
}
