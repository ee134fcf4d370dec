//! Predefined items that dungeon rooms can hold.

use crate::entity::{Item, Potion, Weapon};
use rand::seq::SliceRandom;
use rand::Rng;

lazy_static::lazy_static! {
    /// Weapons that can appear in rooms.
    pub static ref WEAPONS: Vec<Weapon> = vec![
        Weapon { name: "Sword".to_string(), damage: 10 },
    ];

    /// Potions that can appear in rooms.
    pub static ref POTIONS: Vec<Potion> = vec![
        Potion { name: "Health Potion".to_string(), heal_amount: 20 },
    ];
}

/// Look up a predefined item by name, case-insensitively.
pub fn find_item(name: &str) -> Option<Item> {
    let name_lower = name.to_lowercase();
    if let Some(weapon) = WEAPONS.iter().find(|w| w.name.to_lowercase() == name_lower) {
        return Some(Item::Weapon(weapon.clone()));
    }
    if let Some(potion) = POTIONS.iter().find(|p| p.name.to_lowercase() == name_lower) {
        return Some(Item::Potion(potion.clone()));
    }
    None
}

/// Roll the item for a freshly generated room: a uniform choice among
/// nothing, a weapon, and a potion.
pub fn roll_room_item<R: Rng>(rng: &mut R) -> Option<Item> {
    match rng.gen_range(0..3) {
        0 => None,
        1 => WEAPONS.choose(rng).cloned().map(Item::Weapon),
        _ => POTIONS.choose(rng).cloned().map(Item::Potion),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn find_item_is_case_insensitive() {
        assert!(matches!(find_item("sword"), Some(Item::Weapon(_))));
        assert!(matches!(find_item("Health Potion"), Some(Item::Potion(_))));
        assert!(find_item("Vorpal Blade").is_none());
    }

    #[test]
    fn room_item_covers_all_outcomes() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut none = 0;
        let mut weapons = 0;
        let mut potions = 0;
        for _ in 0..300 {
            match roll_room_item(&mut rng) {
                None => none += 1,
                Some(Item::Weapon(_)) => weapons += 1,
                Some(Item::Potion(_)) => potions += 1,
            }
        }
        // Uniform over three outcomes; each should show up plenty of times.
        assert!(none > 50, "none appeared {none} times");
        assert!(weapons > 50, "weapons appeared {weapons} times");
        assert!(potions > 50, "potions appeared {potions} times");
    }
}
