//! Player characters and their class archetypes.

use std::str::FromStr;

use strum::{Display, EnumIter, EnumString};

use super::{CharacterId, Item, ResourceMeter};
use crate::engine::ArgumentError;
use crate::stats::{CoreStats, life_max, mana_max};

/// Character archetypes available at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacterClass {
    Legion,
    Assassin,
    Ranger,
    Spellcaster,
    Fighter,
    Riverman,
    Reaper,
}

/// Starting attributes and per-level growth of a class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassProfile {
    pub base: CoreStats,
    pub growth: CoreStats,
    pub base_mana: u32,
    pub mana_growth: u32,
}

impl ClassProfile {
    const fn new(base: CoreStats, growth: CoreStats, base_mana: u32, mana_growth: u32) -> Self {
        Self {
            base,
            growth,
            base_mana,
            mana_growth,
        }
    }
}

impl CharacterClass {
    /// Parses a class name case-insensitively.
    pub fn parse(name: &str) -> Result<Self, ArgumentError> {
        Self::from_str(name.trim()).map_err(|_| ArgumentError::UnknownClass(name.to_owned()))
    }

    pub fn profile(self) -> ClassProfile {
        use CharacterClass::*;
        match self {
            Legion => ClassProfile::new(CoreStats::new(25, 15, 25), CoreStats::new(3, 1, 3), 10, 1),
            Assassin => {
                ClassProfile::new(CoreStats::new(18, 28, 16), CoreStats::new(2, 3, 1), 20, 2)
            }
            Ranger => ClassProfile::new(CoreStats::new(16, 26, 18), CoreStats::new(1, 3, 2), 20, 2),
            Spellcaster => {
                ClassProfile::new(CoreStats::new(10, 15, 14), CoreStats::new(1, 1, 1), 40, 4)
            }
            Fighter => {
                ClassProfile::new(CoreStats::new(28, 18, 22), CoreStats::new(3, 2, 2), 10, 1)
            }
            Riverman => {
                ClassProfile::new(CoreStats::new(20, 20, 20), CoreStats::new(2, 2, 2), 25, 2)
            }
            Reaper => ClassProfile::new(CoreStats::new(24, 20, 18), CoreStats::new(3, 2, 1), 30, 3),
        }
    }
}

/// Player-controlled character.
///
/// Created once by [`crate::GameEngine::create_character`] and never removed;
/// death is followed by an explicit respawn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub class: CharacterClass,
    pub level: u32,
    /// Running total, never consumed by level-ups.
    pub experience: u64,
    pub stats: CoreStats,
    pub life: ResourceMeter,
    pub mana: ResourceMeter,
    /// Items in drop order.
    pub inventory: Vec<Item>,
}

impl Character {
    /// Level 1 character with class baseline stats and full life/mana.
    ///
    /// A blank name falls back to the class name.
    pub fn new(id: CharacterId, name: &str, class: CharacterClass) -> Self {
        let profile = class.profile();
        let name = match name.trim() {
            "" => class.to_string(),
            trimmed => trimmed.to_owned(),
        };

        Self {
            id,
            name,
            class,
            level: 1,
            experience: 0,
            stats: profile.base,
            life: ResourceMeter::full(life_max(profile.base.vitality)),
            mana: ResourceMeter::full(mana_max(&profile, 1)),
            inventory: Vec::new(),
        }
    }

    pub fn is_dead(&self) -> bool {
        self.life.is_depleted()
    }

    /// Restores life to `vitality × 2 + 20` using the current vitality.
    ///
    /// Level, experience, mana and inventory are kept.
    pub fn respawn(&mut self) {
        self.life = ResourceMeter::full(life_max(self.stats.vitality));
    }
}
