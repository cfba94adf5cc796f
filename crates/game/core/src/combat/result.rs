//! Combat result type and exchange resolution.

use super::damage::{apply_damage, character_damage_range, monster_damage_range};
use crate::env::RollStream;
use crate::state::{Character, Item, Monster};

/// Outcome of one combat exchange.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatResult {
    /// Damage the character dealt to the monster.
    pub character_damage: u32,
    /// Damage the monster dealt to the character.
    pub monster_damage: u32,
    pub monster_killed: bool,
    pub character_died: bool,
    /// Experience granted by the kill (0 unless `monster_killed`).
    pub experience_gained: u64,
    pub levels_gained: u32,
    /// Item dropped by the kill and appended to the inventory.
    pub loot: Option<Item>,
}

/// Resolves one simultaneous exchange.
///
/// Both sides act exactly once: the character's hit lands first, then the
/// monster's counterattack lands even if the monster died from it. Only
/// health/life are mutated; rewards are applied by the engine.
pub fn resolve_exchange(
    character: &mut Character,
    monster: &mut Monster,
    rolls: &mut RollStream<'_>,
) -> CombatResult {
    let character_damage = character_damage_range(character).roll(rolls);
    let monster_damage = monster_damage_range(monster).roll(rolls);

    apply_damage(&mut monster.health, character_damage);
    apply_damage(&mut character.life, monster_damage);

    CombatResult {
        character_damage,
        monster_damage,
        monster_killed: monster.is_dead(),
        character_died: character.is_dead(),
        ..CombatResult::default()
    }
}
