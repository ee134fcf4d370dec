//! Combat resolution.
//!
//! One encounter pits the player against the single monster in the current
//! room. Each turn the caller supplies a [`CombatAction`]; resolution applies
//! every consequence synchronously and returns the new [`EncounterState`]
//! along with a log of [`Effect`]s describing exactly what happened. The
//! effect log is the only narration source, so every presentation layer
//! reports the same events.

use crate::entity::{Monster, Player};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Damage dealt by a plain attack.
pub const ATTACK_DAMAGE: i32 = 10;

/// Damage dealt by a spell.
pub const SPELL_DAMAGE: i32 = 20;

/// Mana consumed by casting a spell.
pub const SPELL_COST: i32 = 10;

/// What the player chooses to do on their combat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatAction {
    Attack,
    CastSpell,
    Flee,
}

/// State of an encounter after a turn. Everything except `Ongoing` is
/// terminal for the encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterState {
    /// The monster still stands; awaiting the next action.
    Ongoing,
    /// The monster is dead and its room is cleared.
    Victory,
    /// The player ran; the monster remains in the room.
    Fled,
    /// The player's health dropped to zero. Fatal to the session.
    Defeated,
}

impl EncounterState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, EncounterState::Ongoing)
    }
}

/// One consequence applied during a combat turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    MonsterDamaged { name: String, amount: i32, remaining: i32 },
    PlayerDamaged { amount: i32, remaining: i32 },
    ManaSpent { amount: i32, remaining: i32 },
    InsufficientMana { required: i32, available: i32 },
    MonsterSlain { name: String },
    PlayerFled,
    PlayerSlain,
    ExperienceGained { amount: u32 },
    LeveledUp { new_level: u32 },
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::MonsterDamaged { name, amount, remaining } => {
                write!(f, "You hit the {name} for {amount} ({remaining} health left).")
            }
            Effect::PlayerDamaged { amount, remaining } => {
                write!(f, "It strikes back for {amount} ({remaining} health left).")
            }
            Effect::ManaSpent { amount, remaining } => {
                write!(f, "The spell drains {amount} mana ({remaining} left).")
            }
            Effect::InsufficientMana { required, available } => {
                write!(f, "Not enough mana: need {required}, have {available}.")
            }
            Effect::MonsterSlain { name } => write!(f, "The {name} falls!"),
            Effect::PlayerFled => write!(f, "You flee the fight."),
            Effect::PlayerSlain => write!(f, "You have been slain."),
            Effect::ExperienceGained { amount } => write!(f, "You gain {amount} experience."),
            Effect::LeveledUp { new_level } => {
                write!(f, "You reach level {new_level}! Health restored, mana surges.")
            }
        }
    }
}

/// Result of one combat turn: the encounter state and what happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatOutcome {
    pub state: EncounterState,
    pub effects: Vec<Effect>,
}

/// Resolve a single combat turn against a live monster.
///
/// Rules:
/// - Attack always lands for [`ATTACK_DAMAGE`].
/// - Casting needs [`SPELL_COST`] mana and deals [`SPELL_DAMAGE`]; with too
///   little mana the turn is consumed with no other effect and no
///   retaliation.
/// - Fleeing ends the encounter immediately, leaving the monster alive.
/// - A monster that survives the player's blow retaliates for its fixed
///   damage. A monster killed by the blow never retaliates.
///
/// The caller clears the room's monster slot on `Victory`.
pub fn resolve_turn(player: &mut Player, monster: &mut Monster, action: CombatAction) -> CombatOutcome {
    let mut effects = Vec::new();

    let damage = match action {
        CombatAction::Flee => {
            effects.push(Effect::PlayerFled);
            return CombatOutcome {
                state: EncounterState::Fled,
                effects,
            };
        }
        CombatAction::Attack => ATTACK_DAMAGE,
        CombatAction::CastSpell => {
            if player.mana < SPELL_COST {
                effects.push(Effect::InsufficientMana {
                    required: SPELL_COST,
                    available: player.mana,
                });
                return CombatOutcome {
                    state: EncounterState::Ongoing,
                    effects,
                };
            }
            player.mana -= SPELL_COST;
            effects.push(Effect::ManaSpent {
                amount: SPELL_COST,
                remaining: player.mana,
            });
            SPELL_DAMAGE
        }
    };

    monster.health -= damage;
    effects.push(Effect::MonsterDamaged {
        name: monster.name.clone(),
        amount: damage,
        remaining: monster.health.max(0),
    });

    if monster.is_dead() {
        effects.push(Effect::MonsterSlain {
            name: monster.name.clone(),
        });
        return CombatOutcome {
            state: EncounterState::Victory,
            effects,
        };
    }

    let retaliation = player.health.take_damage(monster.damage);
    effects.push(Effect::PlayerDamaged {
        amount: monster.damage,
        remaining: player.health.current.max(0),
    });

    let state = if retaliation.dropped_to_zero {
        effects.push(Effect::PlayerSlain);
        EncounterState::Defeated
    } else {
        EncounterState::Ongoing
    };

    CombatOutcome { state, effects }
}
